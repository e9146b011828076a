//! Constructive placement.
//!
//! Characters are chosen left to right. At every position only classes
//! that keep the password completable are eligible, so the result never
//! needs to be rejected.

use super::policy::{placement_feasible, PasswordPolicy};
use super::rules::{ClassCounts, PasswordClass};
use crate::entropy::{EntropyError, RandomSource};

/// Builds one password under the placement rules.
///
/// `policy` must have passed [`PasswordPolicy::validate`].
pub(crate) fn generate<R: RandomSource + ?Sized>(
    policy: &PasswordPolicy,
    source: &mut R,
) -> Result<String, EntropyError> {
    let quota = policy.counts();
    let length = quota.total();
    let mut password = String::with_capacity(length);
    let mut used = ClassCounts::default();
    let mut previous: Option<PasswordClass> = None;

    for position in 0..length {
        let eligible = eligible_classes(&quota, &used, previous, position, length);
        let class = if eligible.is_empty() {
            // Unreachable for a validated policy.
            PasswordClass::Letter
        } else {
            eligible[source.uniform_index(eligible.len())?]
        };

        password.push(class.draw(used.letters, source)?);
        used.increment(class);
        previous = Some(class);
    }

    Ok(password)
}

/// Classes that may go at `position`, in [`PasswordClass::ALL`] order.
fn eligible_classes(
    quota: &ClassCounts,
    used: &ClassCounts,
    previous: Option<PasswordClass>,
    position: usize,
    length: usize,
) -> Vec<PasswordClass> {
    let boundary = position == 0 || position + 1 == length;
    let after_non_letter = matches!(
        previous,
        Some(PasswordClass::Digit | PasswordClass::Special)
    );

    let allowed = |class: PasswordClass| {
        let by_rule = match class {
            PasswordClass::Letter => true,
            PasswordClass::Digit => !after_non_letter,
            PasswordClass::Special => !after_non_letter && !boundary,
        };
        by_rule && used.get(class) < quota.get(class) && completable(quota, used, class)
    };

    if boundary && allowed(PasswordClass::Letter) {
        return vec![PasswordClass::Letter];
    }
    PasswordClass::ALL
        .into_iter()
        .filter(|&class| allowed(class))
        .collect()
}

/// Whether the rest of the quota can still be placed after `class`.
fn completable(quota: &ClassCounts, used: &ClassCounts, class: PasswordClass) -> bool {
    let mut after = *used;
    after.increment(class);
    placement_feasible(&quota.remaining(&after), class != PasswordClass::Letter)
}
