//! Error types for the `emitter-engine` crate.
//!
//! All fallible operations in this crate return [`EngineError`]. The engine
//! is pure, so nothing here is retried or recovered internally; every
//! condition propagates straight to the caller.

/// Errors that can occur while generating primes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The requested limit is not a positive integer.
    #[error("invalid limit {limit}: expected a positive integer")]
    InvalidArgument {
        /// The rejected limit.
        limit: i64,
    },

    /// An emitter's next multiple would not fit in a `u64`.
    #[error("emitter overflow: step {step} cannot advance past {value}")]
    Overflow {
        /// Step (prime value) of the emitter that overflowed.
        step: u64,
        /// The last representable value before the overflow.
        value: u64,
    },
}
