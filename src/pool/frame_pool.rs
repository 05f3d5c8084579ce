//! FramePool - the fixed set of slots pages are loaded into.
//!
//! A [`FramePool`] is an ordered sequence of exactly `capacity` slots. Each
//! slot is either empty or holds one resident page. Slot order never
//! changes: a replacement writes the new page into the victim's slot.

use crate::common::{Error, FrameId, Result};

/// A fixed-capacity pool of frames.
///
/// Lookups are linear scans. Pools in this tool hold a handful of frames,
/// so O(capacity) per reference is the intended cost, and it lets pages be
/// any `PartialEq` type with no hashing or ordering requirement.
///
/// # Example
/// ```
/// use pagesim::{FrameId, FramePool};
///
/// let mut pool = FramePool::new(2).unwrap();
/// let slot = pool.find_empty().unwrap();
/// assert_eq!(slot, FrameId::new(0));
///
/// pool.replace(slot, 7);
/// assert!(pool.contains(&7));
/// assert_eq!(pool.snapshot(), vec![Some(7), None]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePool<P> {
    /// One entry per frame; `None` is an empty frame.
    slots: Vec<Option<P>>,
}

impl<P> FramePool<P> {
    /// Create a pool of `capacity` empty frames.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        Ok(Self {
            slots: (0..capacity).map(|_| None).collect(),
        })
    }

    /// Number of frames (fixed at construction).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied frames.
    pub fn resident_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True when every frame holds a page.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Lowest-indexed empty frame, if any.
    pub fn find_empty(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none).map(FrameId::new)
    }

    /// Page held by `frame_id`, or `None` if the frame is empty.
    ///
    /// # Panics
    /// Panics if `frame_id` is out of range.
    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Option<&P> {
        self.slots[frame_id.0].as_ref()
    }

    /// Load `page` into `frame_id`, returning the page it displaced.
    ///
    /// # Panics
    /// Panics if `frame_id` is out of range.
    pub fn replace(&mut self, frame_id: FrameId, page: P) -> Option<P> {
        self.slots[frame_id.0].replace(page)
    }

    /// Occupied frames in slot order.
    pub fn resident(&self) -> impl Iterator<Item = (FrameId, &P)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|page| (FrameId::new(idx), page)))
    }

    /// Borrow all slots in order.
    #[inline]
    pub fn slots(&self) -> &[Option<P>] {
        &self.slots
    }
}

impl<P: PartialEq> FramePool<P> {
    /// Whether `page` is currently resident.
    pub fn contains(&self, page: &P) -> bool {
        self.position(page).is_some()
    }

    /// Frame holding `page`, if resident.
    pub fn position(&self, page: &P) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref() == Some(page))
            .map(FrameId::new)
    }
}

impl<P: Clone> FramePool<P> {
    /// Independent copy of the slots, for recording in a step.
    pub fn snapshot(&self) -> Vec<Option<P>> {
        self.slots.clone()
    }
}
