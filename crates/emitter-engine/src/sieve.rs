//! The emitter sieve run.
//!
//! Candidates `2..=limit` are scanned in increasing order. Before a
//! candidate is judged, every emitter created so far is caught up to it, in
//! creation order, and checked for an exact landing. A candidate nobody
//! lands on is prime and gets an emitter of its own.
//!
//! # Emitter lifecycle
//!
//! - Emitters live in an arena whose index is discovery order.
//! - No emitter is ever removed before the run ends.
//! - A match does not stop the scan of the remaining emitters: all of them
//!   are advanced on every candidate, so each `next` is ready for the
//!   candidate after it.
//!
//! The cost per candidate therefore grows with the number of primes found
//! so far. [`SieveStats`] records that cost so it can be inspected.

use std::io::Write;

use serde::Serialize;
use tracing::{debug, trace};

use crate::emitter::Emitter;
use crate::error::EngineError;

/// Counters collected during one sieve run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SieveStats {
    /// Number of candidates scanned (`limit - 1` for `limit >= 2`).
    pub candidates: u64,
    /// Number of candidates at least one emitter landed on.
    pub composites: u64,
    /// Emitter checks performed, summed over all candidates.
    pub emitter_visits: u64,
    /// Single-step emitter advances, summed over the run.
    pub advance_steps: u64,
}

/// Complete outcome of a sieve run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sieve {
    /// Upper bound the run was executed for.
    pub limit: u64,
    /// Confirmed primes in ascending (discovery) order.
    pub primes: Vec<u64>,
    /// Final emitter state, one per prime, in discovery order.
    pub emitters: Vec<Emitter>,
    /// Work counters for the run.
    pub stats: SieveStats,
}

/// Check that `limit` is a positive integer and widen it to `u64`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidArgument`] for zero or negative limits.
pub fn validate_limit(limit: i64) -> Result<u64, EngineError> {
    match u64::try_from(limit) {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(EngineError::InvalidArgument { limit }),
    }
}

/// Generate every prime `p` with `2 <= p <= limit`, ascending.
///
/// A limit of 1 yields an empty list.
///
/// # Errors
///
/// Returns [`EngineError::InvalidArgument`] if `limit` is not positive and
/// [`EngineError::Overflow`] if an emitter would leave the `u64` range.
pub fn generate_primes(limit: i64) -> Result<Vec<u64>, EngineError> {
    sieve(limit).map(|run| run.primes)
}

/// Run the emitter sieve up to `limit` and return the full outcome.
///
/// # Errors
///
/// Same conditions as [`generate_primes`].
pub fn sieve(limit: i64) -> Result<Sieve, EngineError> {
    let limit = validate_limit(limit)?;
    debug!(limit, "sieve run starting");

    let mut primes: Vec<u64> = Vec::new();
    let mut emitters: Vec<Emitter> = Vec::new();
    let mut stats = SieveStats::default();

    for n in 2..=limit {
        stats.candidates = stats.candidates.saturating_add(1);

        let mut is_composite = false;
        for emitter in &mut emitters {
            stats.advance_steps = stats.advance_steps.saturating_add(emitter.catch_up(n)?);
            stats.emitter_visits = stats.emitter_visits.saturating_add(1);
            if emitter.reaches(n) {
                is_composite = true;
            }
        }

        if is_composite {
            stats.composites = stats.composites.saturating_add(1);
        } else {
            emitters.push(Emitter::new(n)?);
            primes.push(n);
            trace!(prime = n, emitters = emitters.len(), "emitter created");
        }
    }

    debug!(
        limit,
        primes = primes.len(),
        emitter_visits = stats.emitter_visits,
        advance_steps = stats.advance_steps,
        "sieve run complete"
    );

    Ok(Sieve {
        limit,
        primes,
        emitters,
        stats,
    })
}

/// Write `primes` to `out`, one per line, with nothing else.
///
/// # Errors
///
/// Returns any I/O error raised by `out`.
pub fn write_primes<W: Write>(primes: &[u64], out: &mut W) -> std::io::Result<()> {
    for prime in primes {
        writeln!(out, "{prime}")?;
    }
    out.flush()
}
