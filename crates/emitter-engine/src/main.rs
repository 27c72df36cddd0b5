//! Prints every prime up to a fixed built-in limit, one per line.
//!
//! Standard output carries only the primes; logs go to standard error.

use std::io::BufWriter;

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Upper bound for the printed prime list.
const PRINT_LIMIT: i64 = 20_000;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the sieve fails or standard output cannot be written.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(limit = PRINT_LIMIT, "emitter-engine starting");

    let run = emitter_engine::sieve(PRINT_LIMIT)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    emitter_engine::write_primes(&run.primes, &mut out)?;

    info!(
        primes = run.primes.len(),
        emitter_visits = run.stats.emitter_visits,
        advance_steps = run.stats.advance_steps,
        "emitter-engine done"
    );

    Ok(())
}
