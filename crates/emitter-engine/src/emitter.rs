//! The emitter record: one discovered prime's multiplicative reach.
//!
//! An emitter is created the moment its prime is confirmed and lives until
//! the sieve run ends. It only ever moves forward: `next` is advanced by
//! repeated addition of `step`, never by division or remainder.

use crate::error::EngineError;

/// One prime's pointer into the stream of its own multiples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emitter {
    /// The prime value. Never changes after creation.
    step: u64,
    /// The next multiple of `step` not yet consumed by the scan.
    next: u64,
}

impl Emitter {
    /// Create the emitter for a freshly confirmed prime.
    ///
    /// The first pending multiple is `2 * prime`; the prime itself is never
    /// reported as its own multiple.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if `2 * prime` exceeds `u64::MAX`.
    pub fn new(prime: u64) -> Result<Self, EngineError> {
        let next = prime.checked_mul(2).ok_or(EngineError::Overflow {
            step: prime,
            value: prime,
        })?;
        Ok(Self { step: prime, next })
    }

    /// The prime this emitter was created for.
    pub const fn step(&self) -> u64 {
        self.step
    }

    /// The next multiple this emitter will land on.
    pub const fn next(&self) -> u64 {
        self.next
    }

    /// Advance `next` until it is no longer behind candidate `n`.
    ///
    /// Returns how many single-step advances were taken. Zero means the
    /// emitter was already at or ahead of `n`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if an advance would exceed
    /// `u64::MAX`. The emitter keeps its last valid `next` in that case.
    pub fn catch_up(&mut self, n: u64) -> Result<u64, EngineError> {
        let mut steps: u64 = 0;
        while self.next < n {
            self.next = self.next.checked_add(self.step).ok_or(EngineError::Overflow {
                step: self.step,
                value: self.next,
            })?;
            steps = steps.saturating_add(1);
        }
        Ok(steps)
    }

    /// Whether this emitter currently lands exactly on `n`.
    pub const fn reaches(&self, n: u64) -> bool {
        self.next == n
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_emitter_starts_at_double() {
        let emitter = Emitter::new(7).unwrap();
        assert_eq!(emitter.step(), 7);
        assert_eq!(emitter.next(), 14);
    }

    #[test]
    fn catch_up_stops_at_first_multiple_not_below_n() {
        let mut emitter = Emitter::new(3).unwrap();
        // 6 -> 9 -> 12
        assert_eq!(emitter.catch_up(11).unwrap(), 2);
        assert_eq!(emitter.next(), 12);
        assert!(!emitter.reaches(11));
        assert!(emitter.reaches(12));
    }

    #[test]
    fn catch_up_is_a_no_op_when_ahead() {
        let mut emitter = Emitter::new(5).unwrap();
        assert_eq!(emitter.catch_up(4).unwrap(), 0);
        assert_eq!(emitter.catch_up(10).unwrap(), 0);
        assert_eq!(emitter.next(), 10);
        assert!(emitter.reaches(10));
    }

    #[test]
    fn next_never_moves_backwards() {
        let mut emitter = Emitter::new(2).unwrap();
        let _ = emitter.catch_up(9).unwrap();
        let before = emitter.next();
        let _ = emitter.catch_up(3).unwrap();
        assert_eq!(emitter.next(), before);
    }

    #[test]
    fn creation_overflow_is_reported() {
        let result = Emitter::new(u64::MAX / 2 + 1);
        assert!(matches!(result, Err(EngineError::Overflow { .. })));
    }

    #[test]
    fn advance_overflow_is_reported() {
        // 2p fits in a u64, 3p does not.
        let prime = u64::MAX / 3 + 1;
        let mut emitter = Emitter::new(prime).unwrap();
        let result = emitter.catch_up(u64::MAX);
        assert_eq!(
            result,
            Err(EngineError::Overflow {
                step: prime,
                value: prime * 2,
            })
        );
        assert_eq!(emitter.next(), prime * 2);
    }
}
