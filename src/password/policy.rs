//! Password composition requests and their construction-time validation.

use super::rules::{
    check_composition, check_placement, check_run_lengths, ClassCounts, RuleViolation,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Longest password a policy may request.
pub const MAX_LENGTH: usize = 4096;

/// How passwords are assembled, and therefore which rules they obey.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Left-to-right construction. Letters at both ends; no digit or
    /// special next to another digit or special.
    #[default]
    Placement,
    /// Shuffle the exact multiset until it passes. No leading special;
    /// runs capped at two letters, one digit, one special.
    Shuffle,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Placement => f.write_str("placement"),
            Strategy::Shuffle => f.write_str("shuffle"),
        }
    }
}

/// Policy validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("password length must be at least 1")]
    Empty,

    #[error("password length {length} exceeds maximum {max}")]
    TooLong {
        /// Requested length.
        length: usize,
        /// Largest length accepted.
        max: usize,
    },

    #[error(
        "{strategy} strategy cannot arrange {letters} letters, {digits} digits \
         and {specials} specials: {reason}"
    )]
    Unsatisfiable {
        /// Strategy the counts were checked against.
        strategy: Strategy,
        /// Requested letters.
        letters: usize,
        /// Requested digits.
        digits: usize,
        /// Requested specials.
        specials: usize,
        /// Which rule cannot be met.
        reason: &'static str,
    },
}

/// Requested class counts plus the assembly strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Number of letters, alternating upper and lower case.
    pub letters: usize,
    /// Number of digits.
    pub digits: usize,
    /// Number of special characters.
    pub specials: usize,
    /// How the characters are arranged.
    pub strategy: Strategy,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            letters: 10,
            digits: 4,
            specials: 2,
            strategy: Strategy::Placement,
        }
    }
}

impl PasswordPolicy {
    /// Creates a placement policy with the given counts.
    pub fn new(letters: usize, digits: usize, specials: usize) -> Self {
        Self {
            letters,
            digits,
            specials,
            strategy: Strategy::Placement,
        }
    }

    /// Returns this policy with `strategy` swapped in.
    pub fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    /// Requested counts per class.
    pub fn counts(&self) -> ClassCounts {
        ClassCounts::new(self.letters, self.digits, self.specials)
    }

    /// Total password length.
    pub fn length(&self) -> usize {
        self.letters
            .saturating_add(self.digits)
            .saturating_add(self.specials)
    }

    /// Rejects any policy for which no valid password exists.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let length = self.length();
        if length == 0 {
            return Err(PolicyError::Empty);
        }
        if length > MAX_LENGTH {
            return Err(PolicyError::TooLong {
                length,
                max: MAX_LENGTH,
            });
        }

        let satisfiable = match self.strategy {
            Strategy::Placement => placement_feasible(&self.counts(), true),
            Strategy::Shuffle => run_length_feasible(&self.counts()),
        };
        if !satisfiable {
            return Err(PolicyError::Unsatisfiable {
                strategy: self.strategy,
                letters: self.letters,
                digits: self.digits,
                specials: self.specials,
                reason: match self.strategy {
                    Strategy::Placement => {
                        "needs a letter at each end and one before every digit or special"
                    }
                    Strategy::Shuffle => "no ordering keeps every run within its cap",
                },
            });
        }
        Ok(())
    }

    /// Checks a password against this policy's counts and rules.
    pub fn check(&self, password: &str) -> Result<(), RuleViolation> {
        let chars: Vec<char> = password.chars().collect();
        check_composition(&chars, &self.counts())?;
        match self.strategy {
            Strategy::Placement => check_placement(&chars),
            Strategy::Shuffle => check_run_lengths(&chars),
        }
    }
}

/// Whether `remaining` can still be placed under the placement rules.
///
/// The tail must end in a letter and every digit or special must be
/// followed by a letter, so there must be at least as many letters as
/// other characters. When the tail starts right after a digit or special
/// (or at position 0) its first character must also be a letter, which
/// costs one more.
pub(crate) fn placement_feasible(remaining: &ClassCounts, must_open_with_letter: bool) -> bool {
    if remaining.total() == 0 {
        return true;
    }
    remaining.letters >= remaining.non_letters() + usize::from(must_open_with_letter)
}

/// Whether some ordering of `counts` passes the run-length rules.
///
/// Letters split into `k` blocks of one or two, so `k` ranges over
/// `ceil(L / 2)..=L`. Between and around them sit `m` blocks of digits and
/// specials with `m` in `k-1..=k+1`; each such block alternates digit and
/// special. When `m = k + 1` the password opens with a non-letter block,
/// which must not start with a special.
pub(crate) fn run_length_feasible(counts: &ClassCounts) -> bool {
    if counts.total() == 0 {
        return false;
    }

    let letters = counts.letters;
    let letter_blocks = if letters == 0 {
        0..=0
    } else {
        letters.div_ceil(2)..=letters
    };

    letter_blocks.into_iter().any(|k| {
        [k.checked_sub(1), Some(k), Some(k + 1)]
            .into_iter()
            .flatten()
            .any(|m| {
                non_letter_blocks_fit(counts.digits, counts.specials, m)
                    && (m != k + 1 || counts.specials != counts.digits + m)
            })
    })
}

/// Whether `digits` and `specials` split into exactly `blocks` non-empty
/// alternating blocks.
///
/// An alternating block has a digit/special imbalance of at most one, and
/// odd-sized blocks are the only ones with an imbalance, so the total
/// imbalance is bounded by `blocks` and the number of odd blocks must share
/// the parity of the total.
fn non_letter_blocks_fit(digits: usize, specials: usize, blocks: usize) -> bool {
    let total = digits + specials;
    if total == 0 {
        return blocks == 0;
    }
    if blocks == 0 || blocks > total || digits.abs_diff(specials) > blocks {
        return false;
    }
    blocks % 2 == total % 2 || blocks < total
}
