//! Prime engine for the emitter sieve.
//!
//! Primes are found by incremental multiplicative reconstruction: every
//! discovered prime becomes an [`Emitter`] that walks its own multiples by
//! repeated addition. A candidate is prime exactly when no existing emitter
//! lands on it. No modulus, division, or divisibility test is involved.
//!
//! # Modules
//!
//! - [`emitter`] -- The [`Emitter`] record and its catch-up step.
//! - [`sieve`] -- The candidate scan, [`generate_primes`], run statistics,
//!   and [`write_primes`] for line-per-prime output.
//! - [`error`] -- [`EngineError`] (`InvalidArgument`, `Overflow`).
//!
//! # Usage
//!
//! ```
//! use emitter_engine::generate_primes;
//!
//! let primes = generate_primes(20).ok();
//! assert_eq!(primes, Some(vec![2, 3, 5, 7, 11, 13, 17, 19]));
//! ```

pub mod emitter;
pub mod error;
pub mod sieve;

pub use emitter::Emitter;
pub use error::EngineError;
pub use sieve::{Sieve, SieveStats, generate_primes, sieve, validate_limit, write_primes};
