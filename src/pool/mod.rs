//! Frame pool and trace data model.
//!
//! # Components
//! - [`FramePool`] - Fixed, ordered set of frames holding resident pages
//! - [`Step`] / [`Trace`] - Per-reference outcomes of one simulation run
//! - [`TraceCursor`] - Forward/backward navigation over a trace
//! - [`Metrics`] - Hit/miss counts and hit ratio over a trace or prefix

mod frame_pool;
mod stats;
mod trace;

pub use frame_pool::FramePool;
pub use stats::Metrics;
pub use trace::{Step, Trace, TraceCursor};
