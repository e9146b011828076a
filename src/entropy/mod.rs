//! Randomness sources.
//!
//! Every generator draws through the [`RandomSource`] capability instead of
//! reaching for a global RNG. The secure backend reads the operating
//! system's CSPRNG; the seeded and scripted backends exist for fast
//! non-sensitive output and for reproducible tests.
//!
//! # Failure policy
//!
//! A draw that cannot be served returns [`EntropyError`]. There is no
//! silent fallback to a weaker generator: security-sensitive callers
//! either get bits from the backend they asked for or an error.

mod scripted;
mod source;

pub use scripted::ScriptedRandom;
pub use source::{RandomSource, SecureRandom, SeededRandom};

use thiserror::Error;

/// Errors raised while drawing randomness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntropyError {
    #[error("entropy backend unavailable: {0}")]
    Unavailable(String),
    #[error("scripted entropy exhausted after {draws} draws")]
    Exhausted {
        /// Draws served before the script ran out.
        draws: usize,
    },
    #[error("cannot draw from an empty range")]
    EmptyRange,
}
