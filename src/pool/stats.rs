//! Hit/miss statistics derived from a trace.

use std::fmt;

use serde::Serialize;

use crate::pool::Step;

/// Aggregate outcome of a trace, or of a trace prefix.
///
/// Unlike a running counter, this is computed in one pass from finished
/// steps and never changes afterwards.
///
/// # Example
/// ```
/// use pagesim::{simulate, Policy};
///
/// let trace = simulate(&[1, 2, 1, 3], 2, Policy::Fifo).unwrap();
/// let metrics = trace.metrics();
/// assert_eq!(metrics.hits, 1);
/// assert_eq!(metrics.misses, 3);
/// assert_eq!(metrics.hit_ratio, 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    /// References whose page was already resident.
    pub hits: usize,

    /// References that had to load their page.
    pub misses: usize,

    /// Misses that displaced a resident page.
    pub evictions: usize,

    /// `hits / (hits + misses)`, or 0.0 for no references.
    pub hit_ratio: f64,
}

impl Metrics {
    /// Count hits, misses and evictions over `steps`.
    pub fn from_steps<P>(steps: &[Step<P>]) -> Self {
        let hits = steps.iter().filter(|step| step.hit).count();
        let evictions = steps.iter().filter(|step| step.evicted.is_some()).count();
        let total = steps.len();

        let hit_ratio = if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        };

        Self {
            hits,
            misses: total - hits,
            evictions,
            hit_ratio,
        }
    }

    /// Number of references covered.
    #[inline]
    pub fn total(&self) -> usize {
        self.hits + self.misses
    }

    /// `misses / total`, or 0.0 for no references.
    pub fn miss_ratio(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.misses as f64 / self.total() as f64
        }
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hits: {} | Misses: {} | Evictions: {} | Hit Ratio: {:.2}%",
            self.hits,
            self.misses,
            self.evictions,
            self.hit_ratio * 100.0
        )
    }
}
