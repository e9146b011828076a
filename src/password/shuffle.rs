//! Generate-then-validate.
//!
//! The exact multiset of characters is built once, then shuffled until the
//! run-length rules accept it.
//!
//! # Cost
//!
//! The number of shuffles is unbounded. For the default 10/4/2 policy a
//! few percent of orderings pass, so a call takes tens to hundreds of
//! shuffles; sparse policies that only barely validate can take far more.
//! There is no cap and no cancellation: a capped loop would have to return
//! an invalid password or fail a satisfiable request. Callers that need
//! bounded latency must enforce it around the call.

use super::policy::PasswordPolicy;
use super::rules::{check_run_lengths, PasswordClass};
use crate::entropy::{EntropyError, RandomSource};

/// Builds one password under the run-length rules.
///
/// `policy` must have passed [`PasswordPolicy::validate`], otherwise this
/// never returns.
pub(crate) fn generate<R: RandomSource + ?Sized>(
    policy: &PasswordPolicy,
    source: &mut R,
) -> Result<String, EntropyError> {
    let mut candidate = multiset(policy, source)?;
    let mut attempts: u64 = 0;

    loop {
        attempts += 1;
        fisher_yates(&mut candidate, source)?;
        match check_run_lengths(&candidate) {
            Ok(()) => {
                tracing::debug!(attempts, "Shuffle accepted");
                return Ok(candidate.into_iter().collect());
            }
            Err(violation) => {
                tracing::trace!(attempt = attempts, %violation, "Shuffle rejected");
            }
        }
    }
}

/// The requested characters in class order: letters (alternating case),
/// then digits, then specials.
fn multiset<R: RandomSource + ?Sized>(
    policy: &PasswordPolicy,
    source: &mut R,
) -> Result<Vec<char>, EntropyError> {
    let counts = policy.counts();
    let mut chars = Vec::with_capacity(counts.total());
    for class in PasswordClass::ALL {
        for i in 0..counts.get(class) {
            chars.push(class.draw(i, source)?);
        }
    }
    Ok(chars)
}

/// Shuffles `items` in place, every permutation equally likely.
pub fn fisher_yates<T, R: RandomSource + ?Sized>(
    items: &mut [T],
    source: &mut R,
) -> Result<(), EntropyError> {
    for i in (1..items.len()).rev() {
        let j = source.uniform_index(i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::{ScriptedRandom, SeededRandom};
    use crate::password::policy::Strategy;
    use crate::password::rules::check_composition;
    use std::collections::HashMap;

    fn shuffle_policy(letters: usize, digits: usize, specials: usize) -> PasswordPolicy {
        PasswordPolicy::new(letters, digits, specials).with_strategy(Strategy::Shuffle)
    }

    #[test]
    fn test_fisher_yates_follows_script() {
        let mut items = ['a', 'b', 'c'];
        let mut source = ScriptedRandom::new(vec![0, 0]);
        fisher_yates(&mut items, &mut source).unwrap();
        assert_eq!(items, ['b', 'c', 'a']);
    }

    #[test]
    fn test_fisher_yates_is_uniform() {
        let mut source = SeededRandom::from_u64(21);
        let mut seen: HashMap<[u8; 3], usize> = HashMap::new();
        for _ in 0..6000 {
            let mut items = [0u8, 1, 2];
            fisher_yates(&mut items, &mut source).unwrap();
            *seen.entry(items).or_default() += 1;
        }
        assert_eq!(seen.len(), 6);
        for (perm, count) in seen {
            assert!(count > 800 && count < 1200, "{:?} seen {} times", perm, count);
        }
    }

    #[test]
    fn test_multiset_alternates_letter_case() {
        let mut source = ScriptedRandom::repeating(vec![0]);
        let chars = multiset(&shuffle_policy(3, 2, 1), &mut source).unwrap();
        assert_eq!(chars, vec!['A', 'a', 'A', '0', '0', '!']);
    }

    #[test]
    fn test_first_valid_shuffle_returned() {
        // Multiset "Aa0"; the all-zero shuffle yields "a0A".
        let mut source = ScriptedRandom::new(vec![0; 5]);
        let password = generate(&shuffle_policy(2, 1, 0), &mut source).unwrap();
        assert_eq!(password, "a0A");
    }

    #[test]
    fn test_invalid_shuffle_retried() {
        // "A!" shuffles to "!A" (leading special), then back to "A!".
        let mut source = ScriptedRandom::new(vec![0, 0, 0, 0]);
        let password = generate(&shuffle_policy(1, 0, 1), &mut source).unwrap();
        assert_eq!(password, "A!");
        assert_eq!(source.draws(), 4);
    }

    #[test]
    fn test_entropy_failure_stops_retry_loop() {
        let mut source = ScriptedRandom::new(vec![0; 16]);
        assert!(matches!(
            generate(&PasswordPolicy::default().with_strategy(Strategy::Shuffle), &mut source),
            Err(EntropyError::Exhausted { draws: 16 })
        ));
    }

    #[test]
    fn test_seeded_output_valid() {
        let policy = PasswordPolicy::default().with_strategy(Strategy::Shuffle);
        let mut source = SeededRandom::from_u64(13);
        for _ in 0..100 {
            let password: Vec<char> = generate(&policy, &mut source).unwrap().chars().collect();
            assert_eq!(password.len(), 16);
            assert!(check_composition(&password, &policy.counts()).is_ok());
            assert!(check_run_lengths(&password).is_ok());
        }
    }
}
