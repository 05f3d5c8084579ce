//! Frame identifier type.

use std::fmt;

use serde::Serialize;

/// Identifies a frame (slot) in the frame pool.
///
/// Using `usize` because:
/// 1. Slots are stored in `Vec<Option<P>>`
/// 2. Direct indexing without casting: `slots[frame_id.0]`
/// 3. Matches Rust idioms for array/vector indexing
///
/// A page keeps its `FrameId` for as long as it is resident; replacing a
/// page reuses the victim's slot index.
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let frame_id = FrameId::new(2);
/// assert_eq!(frame_id.to_string(), "F3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }
}

impl fmt::Display for FrameId {
    /// Frames are labelled 1-based (`F1`, `F2`, ...) in reports.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0 + 1)
    }
}
