//! Configuration defaults for pagesim.

use crate::common::{Error, Result};
use crate::input::check_references;
use crate::policy::{simulate, Policy};
use crate::pool::Trace;

/// Number of frames used when the caller does not pick one.
pub const DEFAULT_CAPACITY: usize = 3;

/// Policy used when the caller does not pick one.
pub const DEFAULT_POLICY: Policy = Policy::Lru;

/// Longest reference string accepted at the input boundary.
///
/// Optimal rescans the remaining references on every miss, so a run costs
/// O(n² · capacity) in the worst case. Interactive callers stay responsive
/// well below this bound.
pub const DEFAULT_MAX_REFERENCES: usize = 10_000;

/// Everything a caller chooses before running a simulation.
///
/// # Example
/// ```
/// use pagesim::{PageId, Policy, SimConfig};
///
/// let config = SimConfig::new(3, Policy::Fifo);
/// let refs: Vec<PageId> = [1, 2, 3, 4].into_iter().map(PageId::new).collect();
/// let trace = config.run(&refs).unwrap();
/// assert_eq!(trace.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of frames in the pool.
    pub capacity: usize,

    /// Eviction policy.
    pub policy: Policy,

    /// Upper bound on the reference-string length.
    pub max_references: usize,
}

impl SimConfig {
    /// Create a config with the default reference limit.
    pub fn new(capacity: usize, policy: Policy) -> Self {
        Self {
            capacity,
            policy,
            max_references: DEFAULT_MAX_REFERENCES,
        }
    }

    /// Replace the reference limit.
    pub fn with_max_references(mut self, max_references: usize) -> Self {
        self.max_references = max_references;
        self
    }

    /// Check the config before any work is done.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        Ok(())
    }

    /// Validate, enforce the length bound, then simulate.
    ///
    /// Unlike [`simulate`], an empty reference string is rejected here: this
    /// is the entry point for user-supplied input.
    pub fn run<P: Clone + PartialEq>(&self, refs: &[P]) -> Result<Trace<P>> {
        self.validate()?;
        check_references(refs, self.max_references)?;
        simulate(refs, self.capacity, self.policy)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_POLICY)
    }
}
