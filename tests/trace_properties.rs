//! Property tests over random reference strings.
//!
//! Every policy must satisfy the same structural guarantees, whatever the
//! input: one step per reference, frames sized to capacity, hits only for
//! resident pages, evicted pages gone from the frames.

use pagesim::{simulate, Metrics, Policy, Trace};
use proptest::prelude::*;

fn policy_strategy() -> impl Strategy<Value = Policy> {
    prop_oneof![Just(Policy::Fifo), Just(Policy::Lru), Just(Policy::Optimal)]
}

/// Small page alphabet so hits and evictions both happen often.
fn refs_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..8, 0..64)
}

fn check_structure(refs: &[u8], capacity: usize, trace: &Trace<u8>) -> Result<(), TestCaseError> {
    prop_assert_eq!(trace.len(), refs.len());

    let mut previous: Vec<Option<u8>> = vec![None; capacity];

    for (index, step) in trace.iter().enumerate() {
        prop_assert_eq!(step.page, refs[index]);
        prop_assert_eq!(step.frames.len(), capacity);

        // Hit exactly when the page was resident before this step
        let was_resident = previous.contains(&Some(step.page));
        prop_assert_eq!(step.hit, was_resident);

        // The referenced page is always resident afterwards
        prop_assert!(step.frames.contains(&Some(step.page)));

        if step.hit {
            prop_assert_eq!(&step.frames, &previous);
            prop_assert!(step.evicted.is_none());
        }

        if let Some(evicted) = step.evicted {
            prop_assert!(!step.hit);
            prop_assert!(previous.contains(&Some(evicted)));
            prop_assert!(!step.frames.contains(&Some(evicted)));
        }

        // Exactly one slot changes on a miss, and slot order is stable
        let changed = previous
            .iter()
            .zip(&step.frames)
            .filter(|(before, after)| before != after)
            .count();
        prop_assert_eq!(changed, usize::from(!step.hit));

        // Evictions only happen from a full pool
        if !step.hit && step.evicted.is_none() {
            prop_assert!(previous.contains(&None));
        }

        previous = step.frames.clone();
    }

    Ok(())
}

proptest! {
    #[test]
    fn prop_trace_structure(
        refs in refs_strategy(),
        capacity in 1usize..6,
        policy in policy_strategy(),
    ) {
        let trace = simulate(&refs, capacity, policy).unwrap();
        check_structure(&refs, capacity, &trace)?;
    }

    #[test]
    fn prop_metrics_identity(
        refs in refs_strategy(),
        capacity in 1usize..6,
        policy in policy_strategy(),
    ) {
        let trace = simulate(&refs, capacity, policy).unwrap();
        let metrics = trace.metrics();
        let hits = trace.iter().filter(|step| step.hit).count();

        prop_assert_eq!(metrics.hits, hits);
        prop_assert_eq!(metrics.misses, refs.len() - hits);
        if refs.is_empty() {
            prop_assert_eq!(metrics.hit_ratio, 0.0);
        } else {
            prop_assert_eq!(metrics.hit_ratio, hits as f64 / refs.len() as f64);
        }

        // Prefix metrics agree with a fresh count over the prefix
        for index in 0..trace.len() {
            prop_assert_eq!(
                trace.metrics_through(index),
                Metrics::from_steps(&trace.steps()[..=index])
            );
        }
    }

    #[test]
    fn prop_deterministic(
        refs in refs_strategy(),
        capacity in 1usize..6,
        policy in policy_strategy(),
    ) {
        let first = simulate(&refs, capacity, policy).unwrap();
        let second = simulate(&refs, capacity, policy).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_optimal_never_worse(refs in refs_strategy(), capacity in 1usize..6) {
        let optimal = simulate(&refs, capacity, Policy::Optimal).unwrap().metrics().misses;
        let fifo = simulate(&refs, capacity, Policy::Fifo).unwrap().metrics().misses;
        let lru = simulate(&refs, capacity, Policy::Lru).unwrap().metrics().misses;

        prop_assert!(optimal <= fifo);
        prop_assert!(optimal <= lru);
    }

    #[test]
    fn prop_enough_frames_only_cold_misses(refs in refs_strategy(), policy in policy_strategy()) {
        // With a frame per distinct page nothing is ever evicted
        let trace = simulate(&refs, 8, policy).unwrap();
        let mut distinct = refs.clone();
        distinct.sort_unstable();
        distinct.dedup();

        prop_assert_eq!(trace.metrics().misses, distinct.len());
        prop_assert_eq!(trace.metrics().evictions, 0);
    }
}
