//! Character classes and the validity predicates over finished passwords.
//!
//! Predicates are kept apart from generation so that the shuffle loop can
//! use them as its acceptance test and so that tests can check any output
//! against them directly.

use crate::alphabet::{DIGITS, LOWERCASE, SPECIALS, UPPERCASE};
use crate::entropy::{EntropyError, RandomSource};
use std::fmt;

/// Password character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordClass {
    /// `A-Z` and `a-z`.
    Letter,
    /// `0-9`.
    Digit,
    /// One of `!@#$%^&*?`.
    Special,
}

impl PasswordClass {
    /// All classes, in eligibility order.
    pub const ALL: [PasswordClass; 3] = [
        PasswordClass::Letter,
        PasswordClass::Digit,
        PasswordClass::Special,
    ];

    /// Classifies `c`, or returns `None` if it belongs to no alphabet.
    pub fn of(c: char) -> Option<Self> {
        if UPPERCASE.contains(c) || LOWERCASE.contains(c) {
            Some(PasswordClass::Letter)
        } else if DIGITS.contains(c) {
            Some(PasswordClass::Digit)
        } else if SPECIALS.contains(c) {
            Some(PasswordClass::Special)
        } else {
            None
        }
    }

    /// Longest run allowed under the run-length rules.
    pub fn max_run(self) -> usize {
        match self {
            PasswordClass::Letter => 2,
            PasswordClass::Digit | PasswordClass::Special => 1,
        }
    }

    /// Draws a character of this class.
    ///
    /// Letters alternate case: even `letter_index` is uppercase, odd is
    /// lowercase. The index is ignored for the other classes.
    pub fn draw<R: RandomSource + ?Sized>(
        self,
        letter_index: usize,
        source: &mut R,
    ) -> Result<char, EntropyError> {
        match self {
            PasswordClass::Letter if letter_index % 2 == 0 => UPPERCASE.draw(source),
            PasswordClass::Letter => LOWERCASE.draw(source),
            PasswordClass::Digit => DIGITS.draw(source),
            PasswordClass::Special => SPECIALS.draw(source),
        }
    }
}

impl fmt::Display for PasswordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PasswordClass::Letter => "letter",
            PasswordClass::Digit => "digit",
            PasswordClass::Special => "special",
        };
        f.write_str(name)
    }
}

/// Per-class character counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts {
    /// Letters.
    pub letters: usize,
    /// Digits.
    pub digits: usize,
    /// Specials.
    pub specials: usize,
}

impl ClassCounts {
    /// Creates counts from the three class totals.
    pub fn new(letters: usize, digits: usize, specials: usize) -> Self {
        Self {
            letters,
            digits,
            specials,
        }
    }

    /// Count for `class`.
    pub fn get(&self, class: PasswordClass) -> usize {
        match class {
            PasswordClass::Letter => self.letters,
            PasswordClass::Digit => self.digits,
            PasswordClass::Special => self.specials,
        }
    }

    /// Adds one to the count for `class`.
    pub fn increment(&mut self, class: PasswordClass) {
        match class {
            PasswordClass::Letter => self.letters += 1,
            PasswordClass::Digit => self.digits += 1,
            PasswordClass::Special => self.specials += 1,
        }
    }

    /// Sum over every class.
    pub fn total(&self) -> usize {
        self.letters + self.digits + self.specials
    }

    /// Digits plus specials.
    pub fn non_letters(&self) -> usize {
        self.digits + self.specials
    }

    /// Counts what is left of `self` after `used`.
    pub fn remaining(&self, used: &ClassCounts) -> ClassCounts {
        ClassCounts {
            letters: self.letters.saturating_sub(used.letters),
            digits: self.digits.saturating_sub(used.digits),
            specials: self.specials.saturating_sub(used.specials),
        }
    }

    /// Tallies the classes of `password`.
    pub fn tally(password: &[char]) -> Result<ClassCounts, RuleViolation> {
        let mut counts = ClassCounts::default();
        for class in classes(password)? {
            counts.increment(class);
        }
        Ok(counts)
    }
}

/// Ways a password can break a rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("character {character:?} at position {position} belongs to no class")]
    UnknownCharacter {
        /// Index of the character.
        position: usize,
        /// The unclassified character.
        character: char,
    },

    #[error("expected {expected} {class} characters, found {found}")]
    ClassCount {
        /// Class whose count is off.
        class: PasswordClass,
        /// Requested count.
        expected: usize,
        /// Count present in the password.
        found: usize,
    },

    #[error("position {position} must be a letter")]
    BoundaryNotLetter {
        /// First or last index.
        position: usize,
    },

    #[error("digit or special at position {position} follows another digit or special")]
    AdjacentNonLetters {
        /// Index of the second character of the pair.
        position: usize,
    },

    #[error("password starts with a special character")]
    LeadingSpecial,

    #[error("run of {run} {class} characters ending at position {position} exceeds {max}")]
    RunTooLong {
        /// Class of the run.
        class: PasswordClass,
        /// Run length when the cap was exceeded.
        run: usize,
        /// Cap for the class.
        max: usize,
        /// Index where the run went over the cap.
        position: usize,
    },
}

fn classes(password: &[char]) -> Result<Vec<PasswordClass>, RuleViolation> {
    password
        .iter()
        .enumerate()
        .map(|(position, &character)| {
            PasswordClass::of(character).ok_or(RuleViolation::UnknownCharacter {
                position,
                character,
            })
        })
        .collect()
}

/// Checks exact class counts.
pub fn check_composition(password: &[char], expected: &ClassCounts) -> Result<(), RuleViolation> {
    let found = ClassCounts::tally(password)?;
    for class in PasswordClass::ALL {
        if found.get(class) != expected.get(class) {
            return Err(RuleViolation::ClassCount {
                class,
                expected: expected.get(class),
                found: found.get(class),
            });
        }
    }
    Ok(())
}

/// Checks the placement rules: letters at both ends, and no digit or
/// special directly after another digit or special.
pub fn check_placement(password: &[char]) -> Result<(), RuleViolation> {
    let classes = classes(password)?;
    let last = classes.len().saturating_sub(1);

    for (position, &class) in classes.iter().enumerate() {
        if (position == 0 || position == last) && class != PasswordClass::Letter {
            return Err(RuleViolation::BoundaryNotLetter { position });
        }
        if position > 0
            && class != PasswordClass::Letter
            && classes[position - 1] != PasswordClass::Letter
        {
            return Err(RuleViolation::AdjacentNonLetters { position });
        }
    }
    Ok(())
}

/// Checks the run-length rules: no leading special, and no run longer
/// than its class's [`max_run`](PasswordClass::max_run).
pub fn check_run_lengths(password: &[char]) -> Result<(), RuleViolation> {
    let classes = classes(password)?;
    if classes.first() == Some(&PasswordClass::Special) {
        return Err(RuleViolation::LeadingSpecial);
    }

    let mut current: Option<PasswordClass> = None;
    let mut run = 0;
    for (position, &class) in classes.iter().enumerate() {
        if current == Some(class) {
            run += 1;
        } else {
            current = Some(class);
            run = 1;
        }
        if run > class.max_run() {
            return Err(RuleViolation::RunTooLong {
                class,
                run,
                max: class.max_run(),
                position,
            });
        }
    }
    Ok(())
}
