//! Derived views over the engine's prime list.
//!
//! Nothing here feeds back into the engine. Coverage is recomputed from the
//! primes alone by re-walking each prime's multiples with repeated addition.
//!
//! Index conventions:
//!
//! - Matrix rows are 0-based, in prime discovery order.
//! - Matrix columns and indicator entries are addressed by candidate value
//!   `n` in `2..=limit`; position 0 holds candidate 2.

use emitter_engine::generate_primes;

use crate::error::CoverageError;

/// Which emitter lands on which candidate.
///
/// Cell `(i, n)` is set when `n` is a multiple of `primes[i]` strictly
/// greater than `primes[i]` itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageMatrix {
    limit: u64,
    primes: Vec<u64>,
    columns: usize,
    /// Row-major, `primes.len() * columns` cells.
    cells: Vec<bool>,
}

impl CoverageMatrix {
    /// Build the matrix for `primes` over candidates `2..=limit`.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError::LimitTooLarge`] if the matrix cannot be
    /// indexed with `usize` on this platform.
    pub fn from_primes(primes: &[u64], limit: u64) -> Result<Self, CoverageError> {
        let too_large = || CoverageError::LimitTooLarge { limit };
        let columns = usize::try_from(limit.saturating_sub(1)).map_err(|_err| too_large())?;
        let len = primes.len().checked_mul(columns).ok_or_else(too_large)?;

        let mut matrix = Self {
            limit,
            primes: primes.to_vec(),
            columns,
            cells: vec![false; len],
        };

        for (row, &prime) in primes.iter().enumerate() {
            let Some(mut multiple) = prime.checked_mul(2) else {
                continue;
            };
            while multiple <= limit {
                let index = matrix.cell_index(row, multiple);
                if let Some(cell) = index.and_then(|i| matrix.cells.get_mut(i)) {
                    *cell = true;
                }
                match multiple.checked_add(prime) {
                    Some(next) => multiple = next,
                    None => break,
                }
            }
        }

        Ok(matrix)
    }

    /// Upper bound of the candidate columns.
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of rows (one per prime).
    pub const fn rows(&self) -> usize {
        self.primes.len()
    }

    /// Number of candidate columns (`limit - 1` for `limit >= 2`).
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// The prime owning row `row`.
    pub fn prime(&self, row: usize) -> Option<u64> {
        self.primes.get(row).copied()
    }

    /// Whether the emitter in `row` lands on candidate `n`.
    ///
    /// Out-of-range rows or candidates read as `false`.
    pub fn get(&self, row: usize, n: u64) -> bool {
        self.cell_index(row, n)
            .and_then(|i| self.cells.get(i))
            .copied()
            .unwrap_or(false)
    }

    /// One full row, position 0 being candidate 2.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.rows() {
            return None;
        }
        let start = row.checked_mul(self.columns)?;
        let end = start.checked_add(self.columns)?;
        self.cells.get(start..end)
    }

    /// How many emitters land on candidate `n`.
    ///
    /// This is the number of distinct prime factors of `n`, or zero when `n`
    /// is prime.
    pub fn hits_at(&self, n: u64) -> usize {
        (0..self.rows()).filter(|&row| self.get(row, n)).count()
    }

    /// Every marked cell as `(row, n)`, row by row, candidates ascending.
    pub fn cells(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.cells
            .chunks(self.columns.max(1))
            .enumerate()
            .flat_map(move |(row, chunk)| {
                (2..=self.limit)
                    .zip(chunk)
                    .filter_map(move |(n, &hit)| hit.then_some((row, n)))
            })
    }

    fn cell_index(&self, row: usize, n: u64) -> Option<usize> {
        if row >= self.rows() || n < 2 || n > self.limit {
            return None;
        }
        let column = usize::try_from(n.checked_sub(2)?).ok()?;
        row.checked_mul(self.columns)?.checked_add(column)
    }
}

/// Run the engine once for `limit` and build the coverage matrix.
///
/// # Errors
///
/// Returns [`CoverageError::Engine`] if the engine rejects `limit`, or
/// [`CoverageError::LimitTooLarge`] if the matrix cannot be indexed.
pub fn multiplicative_waves(limit: i64) -> Result<(Vec<u64>, CoverageMatrix), CoverageError> {
    let primes = generate_primes(limit)?;
    let bound = emitter_engine::validate_limit(limit)?;
    let matrix = CoverageMatrix::from_primes(&primes, bound)?;
    Ok((primes, matrix))
}

/// Mark prime positions over candidates `2..=limit`.
///
/// `primes` must be ascending. Position 0 holds candidate 2.
pub fn prime_indicator(primes: &[u64], limit: u64) -> Vec<bool> {
    let mut pending = primes.iter().peekable();
    (2..=limit)
        .map(|n| {
            while pending.next_if(|&&p| p < n).is_some() {}
            pending.next_if_eq(&&n).is_some()
        })
        .collect()
}

/// Differences between consecutive primes.
pub fn prime_gaps(primes: &[u64]) -> Vec<u64> {
    primes
        .windows(2)
        .filter_map(|pair| match pair {
            [low, high] => Some(high.saturating_sub(*low)),
            _ => None,
        })
        .collect()
}

/// Gap points as `(p_{k+1}, p_{k+1} - p_k)`, plotted against the later prime.
pub fn gap_points(primes: &[u64]) -> Vec<(u64, u64)> {
    primes
        .iter()
        .skip(1)
        .copied()
        .zip(prime_gaps(primes))
        .collect()
}
