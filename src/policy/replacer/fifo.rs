//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use crate::common::FrameId;
use crate::policy::replacer::Replacer;
use crate::pool::FramePool;

/// Evicts frames in the order they were filled.
///
/// The queue tracks frame indices, not pages. After an eviction the reused
/// frame re-enters at the tail, since it now holds the newest page.
/// Hits never reorder the queue.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    /// Frame IDs in fill order (front = oldest).
    queue: VecDeque<FrameId>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Number of frames being tracked.
    pub fn size(&self) -> usize {
        self.queue.len()
    }
}

impl<P> Replacer<P> for FifoReplacer {
    fn record_load(&mut self, frame_id: FrameId, _time: usize) {
        self.queue.push_back(frame_id);
    }

    fn victim(&mut self, _pool: &FramePool<P>, _refs: &[P], _time: usize) -> Option<FrameId> {
        // The driver re-appends this frame via record_load after the overwrite.
        self.queue.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_pool(pages: &[u32]) -> FramePool<u32> {
        let mut pool = FramePool::new(pages.len()).unwrap();
        for (idx, &page) in pages.iter().enumerate() {
            pool.replace(FrameId::new(idx), page);
        }
        pool
    }

    #[test]
    fn test_fifo_basic() {
        let mut replacer = FifoReplacer::new();
        let pool = full_pool(&[10, 11, 12]);

        // Fill frames 0, 1, 2
        for idx in 0..3 {
            Replacer::<u32>::record_load(&mut replacer, FrameId::new(idx), idx);
        }
        assert_eq!(replacer.size(), 3);

        // Should evict in FIFO order
        assert_eq!(replacer.victim(&pool, &[], 3), Some(FrameId::new(0)));
        assert_eq!(replacer.victim(&pool, &[], 3), Some(FrameId::new(1)));
        assert_eq!(replacer.victim(&pool, &[], 3), Some(FrameId::new(2)));
        assert_eq!(replacer.victim(&pool, &[], 3), None);
    }

    #[test]
    fn test_fifo_hit_no_reorder() {
        let mut replacer = FifoReplacer::new();
        let pool = full_pool(&[10, 11]);

        Replacer::<u32>::record_load(&mut replacer, FrameId::new(0), 0);
        Replacer::<u32>::record_load(&mut replacer, FrameId::new(1), 1);
        Replacer::<u32>::record_hit(&mut replacer, FrameId::new(0), 2);

        // Frame 0 was filled first, so it goes first despite the later hit
        assert_eq!(replacer.victim(&pool, &[], 3), Some(FrameId::new(0)));
    }

    #[test]
    fn test_fifo_reused_frame_goes_to_tail() {
        let mut replacer = FifoReplacer::new();
        let pool = full_pool(&[10, 11]);

        Replacer::<u32>::record_load(&mut replacer, FrameId::new(0), 0);
        Replacer::<u32>::record_load(&mut replacer, FrameId::new(1), 1);

        let victim = replacer.victim(&pool, &[], 2).unwrap();
        assert_eq!(victim, FrameId::new(0));
        Replacer::<u32>::record_load(&mut replacer, victim, 2);

        assert_eq!(replacer.victim(&pool, &[], 3), Some(FrameId::new(1)));
        assert_eq!(replacer.victim(&pool, &[], 3), Some(FrameId::new(0)));
    }
}
