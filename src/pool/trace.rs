//! Step records, the trace they form, and a cursor for walking it.

use serde::Serialize;

use crate::common::PageId;
use crate::policy::Policy;
use crate::pool::Metrics;

/// Outcome of one reference.
///
/// `frames` is an owned copy of the pool taken *after* the reference was
/// processed, so later steps can never alter it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step<P = PageId> {
    /// The referenced page.
    pub page: P,

    /// Pool contents after this reference, in slot order.
    pub frames: Vec<Option<P>>,

    /// Whether `page` was resident before this reference.
    pub hit: bool,

    /// Page displaced to make room, if any.
    pub evicted: Option<P>,
}

impl<P> Step<P> {
    /// Inverse of [`Step::hit`].
    #[inline]
    pub fn is_miss(&self) -> bool {
        !self.hit
    }
}

/// The complete, immutable record of one simulation run.
///
/// Holds exactly one [`Step`] per input reference, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace<P = PageId> {
    policy: Policy,
    capacity: usize,
    steps: Vec<Step<P>>,
}

impl<P> Trace<P> {
    pub(crate) fn new(policy: Policy, capacity: usize, steps: Vec<Step<P>>) -> Self {
        Self {
            policy,
            capacity,
            steps,
        }
    }

    /// Policy that produced this trace.
    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Number of frames the pool had.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of steps (equal to the number of references).
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All steps in order.
    #[inline]
    pub fn steps(&self) -> &[Step<P>] {
        &self.steps
    }

    /// Step at `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Step<P>> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step<P>> {
        self.steps.iter()
    }

    /// Metrics over the whole trace.
    pub fn metrics(&self) -> Metrics {
        Metrics::from_steps(&self.steps)
    }

    /// Metrics as of step `index`, inclusive.
    ///
    /// An index past the end covers the whole trace.
    pub fn metrics_through(&self, index: usize) -> Metrics {
        let end = index.saturating_add(1).min(self.steps.len());
        Metrics::from_steps(&self.steps[..end])
    }

    /// Cursor positioned on the first step.
    pub fn cursor(&self) -> TraceCursor<'_, P> {
        TraceCursor {
            trace: self,
            index: 0,
        }
    }
}

impl Trace<PageId> {
    /// CRC32 fingerprint of the trace.
    ///
    /// Covers policy, capacity and every step field. Two runs with the same
    /// inputs always produce the same checksum.
    pub fn checksum(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();

        hasher.update(self.policy.name().as_bytes());
        hasher.update(&(self.capacity as u64).to_le_bytes());

        for step in &self.steps {
            hasher.update(&step.page.to_le_bytes());
            hasher.update(&[u8::from(step.hit)]);
            update_optional(&mut hasher, step.evicted);
            for frame in &step.frames {
                update_optional(&mut hasher, *frame);
            }
        }

        hasher.finalize()
    }
}

/// Tag byte then payload, so `None` never collides with a page value.
fn update_optional(hasher: &mut crc32fast::Hasher, page: Option<PageId>) {
    match page {
        Some(page) => {
            hasher.update(&[1]);
            hasher.update(&page.to_le_bytes());
        }
        None => hasher.update(&[0]),
    }
}

impl<'a, P> IntoIterator for &'a Trace<P> {
    type Item = &'a Step<P>;
    type IntoIter = std::slice::Iter<'a, Step<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Forward/backward position over a trace.
///
/// The cursor always sits on a valid index when the trace is non-empty;
/// moving past either end is a no-op that returns `false`.
#[derive(Debug, Clone)]
pub struct TraceCursor<'a, P = PageId> {
    trace: &'a Trace<P>,
    index: usize,
}

impl<'a, P> TraceCursor<'a, P> {
    /// Current position (0-based).
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Step under the cursor, or `None` for an empty trace.
    pub fn current(&self) -> Option<&'a Step<P>> {
        self.trace.get(self.index)
    }

    /// Advance one step. Returns whether the cursor moved.
    pub fn step_forward(&mut self) -> bool {
        if self.index + 1 < self.trace.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Go back one step. Returns whether the cursor moved.
    pub fn step_back(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to the last step.
    pub fn run_to_end(&mut self) {
        self.index = self.trace.len().saturating_sub(1);
    }

    /// Jump to the first step.
    pub fn rewind(&mut self) {
        self.index = 0;
    }

    pub fn is_at_end(&self) -> bool {
        self.index + 1 >= self.trace.len()
    }

    /// Metrics over steps `0..=index`.
    pub fn metrics(&self) -> Metrics {
        self.trace.metrics_through(self.index)
    }
}
