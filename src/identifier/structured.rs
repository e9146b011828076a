//! Alternating letter/digit group identifiers.

use crate::alphabet::{Alphabet, DIGITS, UPPERCASE};
use crate::entropy::{EntropyError, RandomSource, SecureRandom};
use crate::error::GeneratorError;

/// Number of groups in an identifier.
pub const GROUPS: usize = 4;

/// Characters per group.
pub const GROUP_LEN: usize = 4;

/// Group separator.
pub const SEPARATOR: char = '-';

/// Generates `XXXX-XXXX-XXXX-XXXX` identifiers.
///
/// Each group independently starts with either a letter or a digit and
/// then alternates, so every group holds exactly two of each.
#[derive(Debug, Clone)]
pub struct StructuredIdGenerator<R = SecureRandom> {
    source: R,
    letters: Alphabet,
    digits: Alphabet,
}

impl StructuredIdGenerator<SecureRandom> {
    /// Creates a generator backed by the OS CSPRNG.
    pub fn new() -> Self {
        Self::with_source(SecureRandom::new())
    }
}

impl Default for StructuredIdGenerator<SecureRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> StructuredIdGenerator<R> {
    /// Creates a generator drawing from `source`.
    pub fn with_source(source: R) -> Self {
        Self {
            source,
            letters: UPPERCASE,
            digits: DIGITS,
        }
    }

    /// Produces one identifier.
    pub fn generate(&mut self) -> Result<String, GeneratorError> {
        let mut id = String::with_capacity(GROUPS * (GROUP_LEN + 1));
        for group in 0..GROUPS {
            if group > 0 {
                id.push(SEPARATOR);
            }
            self.push_group(&mut id)?;
        }

        tracing::trace!(id = %id, "Generated structured id");
        Ok(id)
    }

    fn push_group(&mut self, id: &mut String) -> Result<(), EntropyError> {
        let start_with_letter = self.source.uniform_bool()?;
        for i in 0..GROUP_LEN {
            let letter = (i % 2 == 0) == start_with_letter;
            let alphabet = if letter { &self.letters } else { &self.digits };
            id.push(alphabet.draw(&mut self.source)?);
        }
        Ok(())
    }
}

/// Returns true if `id` has the structured identifier shape.
///
/// Checks the group count and length, the separator, and that each group
/// alternates between uppercase letters and digits starting from whatever
/// its first character is.
pub fn is_structured_id(id: &str) -> bool {
    let groups: Vec<&str> = id.split(SEPARATOR).collect();
    if groups.len() != GROUPS {
        return false;
    }

    groups.iter().all(|group| {
        let chars: Vec<char> = group.chars().collect();
        if chars.len() != GROUP_LEN {
            return false;
        }
        let starts_with_letter = UPPERCASE.contains(chars[0]);
        chars.iter().enumerate().all(|(i, &c)| {
            if (i % 2 == 0) == starts_with_letter {
                UPPERCASE.contains(c)
            } else {
                DIGITS.contains(c)
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::{ScriptedRandom, SeededRandom};
    use proptest::prelude::*;

    #[test]
    fn test_scripted_letter_first() {
        let mut generator = StructuredIdGenerator::with_source(ScriptedRandom::repeating(vec![0]));
        assert_eq!(generator.generate().unwrap(), "A0A0-A0A0-A0A0-A0A0");
    }

    #[test]
    fn test_scripted_digit_first() {
        let mut generator = StructuredIdGenerator::with_source(ScriptedRandom::repeating(vec![1]));
        assert_eq!(generator.generate().unwrap(), "1B1B-1B1B-1B1B-1B1B");
    }

    #[test]
    fn test_groups_choose_start_independently() {
        // Group 1 starts with a letter, group 2 with a digit, and so on.
        let script = vec![
            0, 2, 3, 4, 5, //
            1, 9, 25, 8, 24, //
            0, 0, 0, 0, 0, //
            1, 1, 1, 1, 1,
        ];
        let mut generator = StructuredIdGenerator::with_source(ScriptedRandom::new(script));
        assert_eq!(generator.generate().unwrap(), "C3E5-9Z8Y-A0A0-1B1B");
    }

    #[test]
    fn test_exhausted_source_fails_whole_call() {
        let mut generator = StructuredIdGenerator::with_source(ScriptedRandom::new(vec![0; 7]));
        assert!(matches!(
            generator.generate(),
            Err(GeneratorError::EntropyUnavailable(EntropyError::Exhausted { draws: 7 }))
        ));
    }

    #[test]
    fn test_secure_generator_shape() {
        let mut generator = StructuredIdGenerator::new();
        for _ in 0..100 {
            let id = generator.generate().unwrap();
            assert!(is_structured_id(&id), "bad id {}", id);
        }
    }

    #[test]
    fn test_both_group_shapes_occur() {
        let mut generator = StructuredIdGenerator::with_source(SeededRandom::from_u64(3));
        let mut letter_first = false;
        let mut digit_first = false;
        for _ in 0..50 {
            let id = generator.generate().unwrap();
            for group in id.split(SEPARATOR) {
                if group.starts_with(|c: char| c.is_ascii_uppercase()) {
                    letter_first = true;
                } else {
                    digit_first = true;
                }
            }
        }
        assert!(letter_first && digit_first);
    }

    #[test]
    fn test_shape_check_rejects_malformed() {
        assert!(is_structured_id("A1B2-3C4D-E5F6-7G8H"));
        assert!(!is_structured_id("A1B2-3C4D-E5F6"));
        assert!(!is_structured_id("A1B2-3C4D-E5F6-7G8HH"));
        assert!(!is_structured_id("AAB2-3C4D-E5F6-7G8H"));
        assert!(!is_structured_id("a1b2-3C4D-E5F6-7G8H"));
        assert!(!is_structured_id("A1B2_3C4D-E5F6-7G8H"));
    }

    proptest! {
        #[test]
        fn prop_ids_are_well_formed(seed in any::<u64>()) {
            let mut generator = StructuredIdGenerator::with_source(SeededRandom::from_u64(seed));
            let id = generator.generate().unwrap();
            prop_assert!(is_structured_id(&id), "bad id {}", id);
            prop_assert_eq!(id.len(), GROUPS * GROUP_LEN + GROUPS - 1);
        }

        #[test]
        fn prop_same_seed_same_ids(seed in any::<u64>()) {
            let mut a = StructuredIdGenerator::with_source(SeededRandom::from_u64(seed));
            let mut b = StructuredIdGenerator::with_source(SeededRandom::from_u64(seed));
            for _ in 0..4 {
                prop_assert_eq!(a.generate().unwrap(), b.generate().unwrap());
            }
        }
    }
}
