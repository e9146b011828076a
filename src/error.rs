//! Crate-level error type.

use crate::entropy::EntropyError;
use crate::password::PolicyError;
use thiserror::Error;

/// Errors a generator can return.
///
/// A generator either produces a string that satisfies all of its
/// invariants or fails the whole call with one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The randomness backend could not supply bits. Never masked.
    #[error("entropy unavailable: {0}")]
    EntropyUnavailable(#[from] EntropyError),

    /// The requested parameters admit no valid output.
    #[error("constraint unsatisfiable: {0}")]
    ConstraintUnsatisfiable(#[from] PolicyError),
}
