//! LRU (Least Recently Used) replacement policy.

use crate::common::FrameId;
use crate::policy::replacer::Replacer;
use crate::pool::FramePool;

/// Evicts the frame whose page was referenced longest ago.
///
/// Keeps one last-reference time per frame. A frame holds exactly one page,
/// so this is the same as timing each resident page; overwriting a frame
/// drops the evicted page's time along with it.
///
/// Reference times are strictly increasing, so two resident pages never
/// share a time during a simulation. If they ever do, the lowest frame
/// index wins.
#[derive(Debug, Default)]
pub struct LruReplacer {
    /// `last_used[frame]` is the time the frame's page was last referenced.
    last_used: Vec<Option<usize>>,
}

impl LruReplacer {
    /// Create an LRU replacer for a pool of `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            last_used: vec![None; capacity],
        }
    }

    /// Last reference time of the page in `frame_id`.
    pub fn last_used(&self, frame_id: FrameId) -> Option<usize> {
        self.last_used.get(frame_id.0).copied().flatten()
    }

    fn touch(&mut self, frame_id: FrameId, time: usize) {
        if frame_id.0 >= self.last_used.len() {
            self.last_used.resize(frame_id.0 + 1, None);
        }
        self.last_used[frame_id.0] = Some(time);
    }
}

impl<P> Replacer<P> for LruReplacer {
    fn record_load(&mut self, frame_id: FrameId, time: usize) {
        self.touch(frame_id, time);
    }

    fn record_hit(&mut self, frame_id: FrameId, time: usize) {
        self.touch(frame_id, time);
    }

    fn victim(&mut self, pool: &FramePool<P>, _refs: &[P], _time: usize) -> Option<FrameId> {
        let mut victim: Option<(FrameId, usize)> = None;

        for (frame_id, _) in pool.resident() {
            // A resident page without a time was never referenced: oldest of all.
            let time = match self.last_used(frame_id) {
                Some(time) => time,
                None => return Some(frame_id),
            };

            // Strict `<` keeps the lowest frame on ties.
            if victim.map_or(true, |(_, oldest)| time < oldest) {
                victim = Some((frame_id, time));
            }
        }

        victim.map(|(frame_id, _)| frame_id)
    }
}
