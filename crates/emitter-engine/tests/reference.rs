//! Cross-checks of the emitter sieve against a trial-division reference.

#![allow(
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects
)]

use emitter_engine::{EngineError, generate_primes, sieve};

/// Primes by the textbook definition: no divisor in `[2, k - 1]`.
fn trial_division(limit: u64) -> Vec<u64> {
    (2..=limit)
        .filter(|&k| (2..k).take_while(|d| d * d <= k).all(|d| k % d != 0))
        .collect()
}

#[test]
fn matches_trial_division_up_to_ten_thousand() {
    assert_eq!(generate_primes(10_000).unwrap(), trial_division(10_000));
}

#[test]
fn matches_trial_division_for_every_small_limit() {
    for limit in 2..=200_i64 {
        let expected = trial_division(u64::try_from(limit).unwrap());
        assert_eq!(generate_primes(limit).unwrap(), expected, "limit {limit}");
    }
}

#[test]
fn output_is_strictly_increasing() {
    let primes = generate_primes(5_000).unwrap();
    assert!(primes.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn known_prime_counts() {
    assert_eq!(generate_primes(100).unwrap().len(), 25);
    assert_eq!(generate_primes(1_000).unwrap().len(), 168);
    assert_eq!(generate_primes(10_000).unwrap().len(), 1_229);
}

#[test]
fn smaller_limit_is_a_prefix_of_larger_limit() {
    let long = generate_primes(3_000).unwrap();
    for limit in [2_i64, 3, 10, 97, 100, 1_000, 2_999] {
        let short = generate_primes(limit).unwrap();
        assert!(short.len() <= long.len());
        assert_eq!(short.as_slice(), &long[..short.len()], "limit {limit}");
    }
}

#[test]
fn calls_share_no_state() {
    let first = generate_primes(1_000).unwrap();
    let _ = generate_primes(37).unwrap();
    let again = generate_primes(1_000).unwrap();
    assert_eq!(first, again);
}

#[test]
fn zero_is_rejected_and_one_is_empty() {
    assert_eq!(
        generate_primes(0),
        Err(EngineError::InvalidArgument { limit: 0 })
    );
    assert!(generate_primes(1).unwrap().is_empty());
}

#[test]
fn run_outcome_is_consistent_with_prime_list() {
    let run = sieve(2_000).unwrap();
    assert_eq!(run.primes, generate_primes(2_000).unwrap());
    assert_eq!(run.emitters.len(), run.primes.len());
    assert_eq!(run.stats.candidates, 1_999);
}
