// ==============================================
// SAMPLER BEHAVIOR TESTS (integration)
// ==============================================
//
// Statistical and scenario checks against the public API only. Statistical
// tests use fixed seeds and tolerances many standard deviations wide, so they
// are deterministic in practice.

use std::collections::VecDeque;

use samplekit::policy::history::HistorySampler;
use samplekit::policy::uniform::UniformSampler;
use samplekit::source::{RngSource, ScriptedSource, UniformSource, XorShift64};

/// Wraps a source and counts draws.
struct CountingSource<S> {
    inner: S,
    draws: usize,
}

impl<S: UniformSource> UniformSource for CountingSource<S> {
    fn next_below(&mut self, bound: usize) -> usize {
        self.draws += 1;
        self.inner.next_below(bound)
    }
}

fn seeded(bound: usize, capacity: usize, retries: usize, seed: u64) -> HistorySampler {
    HistorySampler::with_source(
        bound,
        capacity,
        retries,
        std::iter::empty(),
        RngSource::seed_from_u64(seed),
    )
    .unwrap()
}

/// Fraction of calls whose value equals the previous value.
fn immediate_repeat_rate(mut next: impl FnMut() -> usize, trials: usize) -> f64 {
    let mut prev = next();
    let mut repeats = 0;
    for _ in 0..trials {
        let v = next();
        if v == prev {
            repeats += 1;
        }
        prev = v;
    }
    repeats as f64 / trials as f64
}

// ==============================================
// Scenarios
// ==============================================

mod scenarios {
    use super::*;

    #[test]
    fn always_recent_draw_falls_back_to_last_candidate() {
        let mut sampler =
            HistorySampler::with_source(7, 4, 4, [0, 1, 2, 3], ScriptedSource::new([2])).unwrap();

        assert_eq!(sampler.next_value(), 2);
        assert_eq!(sampler.history().to_vec(), vec![1, 2, 3, 2]);
        assert_eq!(sampler.source().draws(), 4);
    }

    #[test]
    fn fresh_first_draw_is_accepted() {
        let mut sampler =
            HistorySampler::with_source(7, 4, 4, [0, 1, 2, 3], ScriptedSource::new([5])).unwrap();

        assert_eq!(sampler.next_value(), 5);
        assert_eq!(sampler.history().to_vec(), vec![1, 2, 3, 5]);
        assert_eq!(sampler.source().draws(), 1);
    }

    #[test]
    fn zero_capacity_never_keeps_history() {
        let mut sampler = seeded(3, 0, 4, 8);
        for _ in 0..50 {
            let before = sampler.history().len();
            assert_eq!(before, 0);
            assert!(sampler.next_value() < 3);
            assert!(sampler.history().is_empty());
        }
    }
}

// ==============================================
// Structural properties
// ==============================================

mod structure {
    use super::*;

    #[test]
    fn range_holds_for_many_configurations() {
        for bound in 1..=9 {
            for capacity in 0..=5 {
                for retries in 0..=5 {
                    let mut sampler = seeded(bound, capacity, retries, bound as u64 * 31);
                    for _ in 0..200 {
                        assert!(sampler.next_value() < bound);
                        assert!(sampler.history().len() <= capacity);
                    }
                }
            }
        }
    }

    #[test]
    fn history_matches_fifo_model() {
        let capacity = 4;
        let mut sampler = seeded(7, capacity, 4, 5);
        let mut model: VecDeque<usize> = VecDeque::new();

        for _ in 0..1_000 {
            let v = sampler.next_value();
            model.push_back(v);
            while model.len() > capacity {
                model.pop_front();
            }
            assert_eq!(sampler.history().to_vec(), Vec::from(model.clone()));
        }
    }

    #[test]
    fn termination_draw_budget() {
        for retries in 0..=6 {
            let source = CountingSource {
                inner: XorShift64::new(retries as u64 + 1),
                draws: 0,
            };
            // bound 2 with a window of 4 keeps most draws recent
            let mut sampler =
                HistorySampler::with_source(2, 4, retries, std::iter::empty(), source).unwrap();
            for _ in 0..500 {
                let before = sampler.source().draws;
                sampler.next_value();
                let used = sampler.source().draws - before;
                assert!(used >= 1);
                assert!(used <= retries + 1);
            }
        }
    }

    #[test]
    fn bound_one_always_zero() {
        let mut sampler = seeded(1, 4, 4, 0);
        for _ in 0..100 {
            assert_eq!(sampler.next_value(), 0);
        }
        assert_eq!(sampler.history().to_vec(), vec![0, 0, 0, 0]);
    }
}

// ==============================================
// Statistical properties
// ==============================================

mod statistics {
    use super::*;

    const TRIALS: usize = 70_000;
    const BOUND: usize = 7;

    #[test]
    fn zero_capacity_repeats_like_uniform() {
        let mut sampler = seeded(BOUND, 0, 4, 1);
        let rate = immediate_repeat_rate(|| sampler.next_value(), TRIALS);
        let expected = 1.0 / BOUND as f64;
        assert!(
            (rate - expected).abs() < 0.013,
            "repeat rate {rate} should be near {expected}"
        );
    }

    #[test]
    fn zero_retries_repeats_like_uniform() {
        let mut sampler = seeded(BOUND, 4, 0, 2);
        let rate = immediate_repeat_rate(|| sampler.next_value(), TRIALS);
        let expected = 1.0 / BOUND as f64;
        assert!(
            (rate - expected).abs() < 0.013,
            "repeat rate {rate} should be near {expected}"
        );
    }

    #[test]
    fn uniform_baseline_repeats_at_one_over_bound() {
        let mut sampler = UniformSampler::with_seed(BOUND, 3).unwrap();
        let rate = immediate_repeat_rate(|| sampler.next_value(), TRIALS);
        assert!((rate - 1.0 / BOUND as f64).abs() < 0.013);
    }

    #[test]
    fn history_suppresses_immediate_repeats() {
        let mut sampler = seeded(BOUND, 4, 4, 4);
        let rate = immediate_repeat_rate(|| sampler.next_value(), TRIALS);
        // (4/7)^4 / 4 ≈ 0.027 in the full-window steady state
        assert!(rate < 0.06, "repeat rate {rate} should be well below 1/7");
    }

    #[test]
    fn returning_a_recent_value_is_rarer_than_uniform() {
        let mut sampler = seeded(BOUND, 4, 4, 5);
        // fill the window first
        for _ in 0..8 {
            sampler.next_value();
        }

        let mut hits = 0;
        for _ in 0..TRIALS {
            let recent = sampler.history().to_vec();
            let v = sampler.next_value();
            if recent.contains(&v) {
                hits += 1;
            }
        }
        let rate = hits as f64 / TRIALS as f64;
        let uniform = 1.0 / BOUND as f64;
        assert!(rate < uniform, "in-history rate {rate} should be below {uniform}");
    }

    #[test]
    fn more_retries_means_fewer_recent_values() {
        let in_history_rate = |retries: usize| {
            let mut sampler = seeded(BOUND, 4, retries, 6);
            let mut hits = 0;
            for _ in 0..TRIALS {
                let recent = sampler.history().to_vec();
                if recent.contains(&sampler.next_value()) {
                    hits += 1;
                }
            }
            hits as f64 / TRIALS as f64
        };

        let one = in_history_rate(1);
        let four = in_history_rate(4);
        assert!(four < one, "4 retries ({four}) should beat 1 retry ({one})");
    }

    #[test]
    fn every_value_still_appears() {
        let mut sampler = seeded(BOUND, 4, 4, 7);
        let mut counts = [0usize; BOUND];
        for _ in 0..TRIALS {
            counts[sampler.next_value()] += 1;
        }
        // Not uniform by design, but no value is starved
        let expected = TRIALS / BOUND;
        for (value, &count) in counts.iter().enumerate() {
            assert!(
                count > expected / 2,
                "value {value} drawn {count} times, expected roughly {expected}"
            );
        }
    }
}
