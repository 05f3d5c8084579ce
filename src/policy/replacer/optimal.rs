//! Optimal (Belady) replacement policy.
//!
//! Offline: the whole reference string must be known up front. On each
//! eviction the remaining references are rescanned, so a victim choice
//! costs O(n · capacity). That is fine at teaching scale.

use crate::common::FrameId;
use crate::policy::replacer::Replacer;
use crate::pool::FramePool;

/// Evicts the resident page whose next use is farthest in the future.
///
/// A page that is never used again counts as infinitely far; the first
/// such page in frame order is chosen immediately. Otherwise the strict
/// maximum next-use position wins, and the lowest frame wins a tie.
#[derive(Debug, Default, Clone, Copy)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    pub fn new() -> Self {
        OptimalReplacer
    }
}

/// Position of the first reference to `page` after `time`.
pub(crate) fn next_use<P: PartialEq>(refs: &[P], time: usize, page: &P) -> Option<usize> {
    let start = time.saturating_add(1).min(refs.len());
    refs[start..]
        .iter()
        .position(|r| r == page)
        .map(|offset| start + offset)
}

impl<P: PartialEq> Replacer<P> for OptimalReplacer {
    fn record_load(&mut self, _frame_id: FrameId, _time: usize) {}

    fn victim(&mut self, pool: &FramePool<P>, refs: &[P], time: usize) -> Option<FrameId> {
        let mut victim: Option<(FrameId, usize)> = None;

        for (frame_id, page) in pool.resident() {
            let next = match next_use(refs, time, page) {
                Some(next) => next,
                None => return Some(frame_id),
            };

            if victim.map_or(true, |(_, farthest)| next > farthest) {
                victim = Some((frame_id, next));
            }
        }

        victim.map(|(frame_id, _)| frame_id)
    }
}
