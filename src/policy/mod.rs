//! Page replacement policies and the simulation driver.
//!
//! [`simulate`] walks a reference string once, keeping a [`FramePool`] and
//! one [`Replacer`](replacer::Replacer), and records a [`Step`] per reference.
//! The pool logic (hit check, fill the lowest empty frame, overwrite the
//! victim's frame) is shared; only victim selection differs per policy.

pub mod replacer;

use std::fmt;
use std::str::FromStr;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::common::{Error, Result};
use crate::pool::{FramePool, Step, Trace};
use replacer::{FifoReplacer, LruReplacer, OptimalReplacer, Replacer};

/// The closed set of eviction policies.
///
/// Every caller matches exhaustively, so an unknown policy cannot reach the
/// simulator. Parsing a policy *name* is the only place
/// [`Error::UnknownPolicy`] can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First-In-First-Out.
    #[serde(rename = "FIFO")]
    Fifo,
    /// Least Recently Used.
    #[serde(rename = "LRU")]
    Lru,
    /// Belady's optimal offline policy.
    Optimal,
}

impl Policy {
    /// All policies, in display order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    /// Case-insensitive; also accepts "OPT" and "Belady" for Optimal.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" | "belady" => Ok(Policy::Optimal),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

/// Run `policy` over `refs` with a pool of `capacity` frames.
///
/// Returns one step per reference. An empty `refs` yields an empty trace.
/// Identical inputs always produce identical traces.
///
/// # Errors
/// - `Error::InvalidCapacity` if `capacity` is 0 (no steps are computed)
///
/// # Example
/// ```
/// use pagesim::{simulate, Policy};
///
/// let trace = simulate(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5], 3, Policy::Fifo).unwrap();
/// assert_eq!(trace.len(), 12);
/// assert_eq!(trace.steps()[3].evicted, Some(1));
/// assert_eq!(trace.metrics().hit_ratio, 0.25);
/// ```
pub fn simulate<P: Clone + PartialEq>(
    refs: &[P],
    capacity: usize,
    policy: Policy,
) -> Result<Trace<P>> {
    match policy {
        Policy::Fifo => run(refs, capacity, policy, FifoReplacer::new()),
        Policy::Lru => run(refs, capacity, policy, LruReplacer::new(capacity)),
        Policy::Optimal => run(refs, capacity, policy, OptimalReplacer::new()),
    }
}

/// Run several policies over the same references, one thread each.
///
/// Traces come back in the order of `policies`. Each run owns its own pool
/// and replacer, so nothing is shared between threads except the input.
///
/// # Errors
/// - `Error::InvalidCapacity` if `capacity` is 0
pub fn compare<P>(refs: &[P], capacity: usize, policies: &[Policy]) -> Result<Vec<Trace<P>>>
where
    P: Clone + PartialEq + Send + Sync,
{
    if capacity == 0 {
        return Err(Error::InvalidCapacity(capacity));
    }

    let results: Mutex<Vec<Option<Result<Trace<P>>>>> =
        Mutex::new((0..policies.len()).map(|_| None).collect());

    std::thread::scope(|scope| {
        for (slot, &policy) in policies.iter().enumerate() {
            let results = &results;
            scope.spawn(move || {
                let trace = simulate(refs, capacity, policy);
                results.lock()[slot] = Some(trace);
            });
        }
    });

    // The scope joins every thread (re-raising any panic), so each slot is filled.
    results.into_inner().into_iter().flatten().collect()
}

/// Shared driver: one pass over `refs`, asking `replacer` for victims.
fn run<P, R>(refs: &[P], capacity: usize, policy: Policy, mut replacer: R) -> Result<Trace<P>>
where
    P: Clone + PartialEq,
    R: Replacer<P>,
{
    let mut pool = FramePool::new(capacity)?;
    let mut steps = Vec::with_capacity(refs.len());

    debug!(%policy, capacity, references = refs.len(), "simulation started");

    for (time, page) in refs.iter().enumerate() {
        let mut evicted = None;

        let hit = match pool.position(page) {
            Some(frame_id) => {
                replacer.record_hit(frame_id, time);
                true
            }
            None => {
                let frame_id = match pool.find_empty() {
                    Some(frame_id) => frame_id,
                    None => {
                        let frame_id = replacer
                            .victim(&pool, refs, time)
                            .ok_or(Error::NoVictim)?;
                        trace!(step = time, frame = %frame_id, "evicting");
                        frame_id
                    }
                };

                evicted = pool.replace(frame_id, page.clone());
                replacer.record_load(frame_id, time);
                false
            }
        };

        steps.push(Step {
            page: page.clone(),
            frames: pool.snapshot(),
            hit,
            evicted,
        });
    }

    let trace = Trace::new(policy, capacity, steps);
    debug!(
        %policy,
        hits = trace.metrics().hits,
        misses = trace.metrics().misses,
        "simulation finished"
    );

    Ok(trace)
}
