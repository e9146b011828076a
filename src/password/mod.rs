//! Passwords with exact class composition and placement rules.
//!
//! Two strategies are available and they enforce different rule sets:
//!
//! - [`Strategy::Placement`] (default) builds left to right. First and last
//!   characters are letters and no digit or special touches another digit
//!   or special.
//! - [`Strategy::Shuffle`] shuffles the exact multiset until no special
//!   leads and no run exceeds two letters, one digit or one special. Its
//!   retry count is unbounded; see the `shuffle` module docs.
//!
//! Both draw every character and every shuffle from the injected source,
//! which defaults to the OS CSPRNG. Policies with no valid output are
//! rejected when the generator is built.

mod placement;
mod policy;
mod rules;
mod shuffle;

pub use policy::{PasswordPolicy, PolicyError, Strategy, MAX_LENGTH};
pub use rules::{
    check_composition, check_placement, check_run_lengths, ClassCounts, PasswordClass,
    RuleViolation,
};
pub use shuffle::fisher_yates;

use crate::entropy::{RandomSource, SecureRandom};
use crate::error::GeneratorError;

/// Generates passwords that satisfy a validated [`PasswordPolicy`].
#[derive(Debug, Clone)]
pub struct ConstraintPasswordGenerator<R = SecureRandom> {
    policy: PasswordPolicy,
    source: R,
}

impl ConstraintPasswordGenerator<SecureRandom> {
    /// Creates a generator backed by the OS CSPRNG.
    pub fn new(policy: PasswordPolicy) -> Result<Self, GeneratorError> {
        Self::with_source(policy, SecureRandom::new())
    }
}

impl<R: RandomSource> ConstraintPasswordGenerator<R> {
    /// Creates a generator drawing from `source`.
    ///
    /// Fails with [`GeneratorError::ConstraintUnsatisfiable`] if no password
    /// can satisfy `policy`.
    pub fn with_source(policy: PasswordPolicy, source: R) -> Result<Self, GeneratorError> {
        policy.validate()?;
        tracing::debug!(
            letters = policy.letters,
            digits = policy.digits,
            specials = policy.specials,
            strategy = %policy.strategy,
            "Password generator ready"
        );
        Ok(Self { policy, source })
    }

    /// The validated policy this generator follows.
    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Produces one password.
    pub fn generate(&mut self) -> Result<String, GeneratorError> {
        let password = match self.policy.strategy {
            Strategy::Placement => placement::generate(&self.policy, &mut self.source)?,
            Strategy::Shuffle => shuffle::generate(&self.policy, &mut self.source)?,
        };
        debug_assert!(self.policy.check(&password).is_ok());
        Ok(password)
    }
}
