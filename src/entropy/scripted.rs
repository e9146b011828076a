//! Deterministic stand-in for a random source.

use super::{EntropyError, RandomSource};

/// Replays a fixed list of values as draws.
///
/// Each call to `uniform_index(n)` consumes the next scripted value and
/// returns it reduced modulo `n`. A finite script that runs out reports
/// [`EntropyError::Exhausted`], which generators surface exactly as they
/// would a failed OS backend.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<usize>,
    position: usize,
    cycle: bool,
}

impl ScriptedRandom {
    /// Creates a script that fails once every value has been used.
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            position: 0,
            cycle: false,
        }
    }

    /// Creates a script that starts over after its last value.
    pub fn repeating(values: impl Into<Vec<usize>>) -> Self {
        Self {
            cycle: true,
            ..Self::new(values)
        }
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> usize {
        self.position
    }

    /// Returns true if a finite script has no values left.
    pub fn is_exhausted(&self) -> bool {
        !self.cycle && self.position >= self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_index(&mut self, n: usize) -> Result<usize, EntropyError> {
        if n == 0 {
            return Err(EntropyError::EmptyRange);
        }
        if self.values.is_empty() || self.is_exhausted() {
            return Err(EntropyError::Exhausted {
                draws: self.position,
            });
        }

        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        Ok(value % n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_reduced_modulo_range() {
        let mut script = ScriptedRandom::new(vec![7, 2, 10]);
        assert_eq!(script.uniform_index(5).unwrap(), 2);
        assert_eq!(script.uniform_index(5).unwrap(), 2);
        assert_eq!(script.uniform_index(5).unwrap(), 0);
        assert_eq!(script.draws(), 3);
    }

    #[test]
    fn test_finite_script_exhausts() {
        let mut script = ScriptedRandom::new(vec![1]);
        script.uniform_index(4).unwrap();
        assert!(script.is_exhausted());
        assert_eq!(
            script.uniform_index(4),
            Err(EntropyError::Exhausted { draws: 1 })
        );
    }

    #[test]
    fn test_repeating_script_cycles() {
        let mut script = ScriptedRandom::repeating(vec![0, 1]);
        let bools: Vec<bool> = (0..4).map(|_| script.uniform_bool().unwrap()).collect();
        assert_eq!(bools, vec![true, false, true, false]);
        assert!(!script.is_exhausted());
    }

    #[test]
    fn test_empty_script_fails() {
        let mut script = ScriptedRandom::repeating(Vec::<usize>::new());
        assert!(matches!(
            script.uniform_index(3),
            Err(EntropyError::Exhausted { draws: 0 })
        ));
    }
}
