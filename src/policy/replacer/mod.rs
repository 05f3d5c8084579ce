//! Eviction policy implementations (replacers).
//!
//! Each replacer owns only its policy-private bookkeeping. The frame pool
//! itself lives in the simulation driver, which asks the replacer for a
//! victim once the pool is full.
//!
//! Implements:
//! - [`FifoReplacer`] - evicts the frame filled longest ago
//! - [`LruReplacer`] - evicts the frame referenced longest ago
//! - [`OptimalReplacer`] - evicts the page used farthest in the future (Belady)

mod fifo;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

use crate::common::FrameId;
use crate::pool::FramePool;

/// Hooks the simulation driver calls while walking a reference string.
///
/// `time` is always the 0-based position of the current reference.
pub trait Replacer<P> {
    /// A missing page was just loaded into `frame_id`.
    fn record_load(&mut self, frame_id: FrameId, time: usize);

    /// The page in `frame_id` was referenced again.
    fn record_hit(&mut self, _frame_id: FrameId, _time: usize) {}

    /// Pick the frame to overwrite. Only called when `pool` is full.
    ///
    /// `refs` is the whole reference string; offline policies look ahead of
    /// `time` in it.
    fn victim(&mut self, pool: &FramePool<P>, refs: &[P], time: usize) -> Option<FrameId>;
}
