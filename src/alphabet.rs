//! Fixed character tables.
//!
//! Alphabets are ASCII, ordered and immutable. Generators hold them by
//! value (they are `Copy` views over static data), so no table is ever
//! shared mutably between instances.

use crate::entropy::{EntropyError, RandomSource};

/// An ordered, immutable set of ASCII characters a class draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: &'static [u8],
}

/// `A` through `Z`.
pub const UPPERCASE: Alphabet = Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");

/// `a` through `z`.
pub const LOWERCASE: Alphabet = Alphabet::new(b"abcdefghijklmnopqrstuvwxyz");

/// `0` through `9`.
pub const DIGITS: Alphabet = Alphabet::new(b"0123456789");

/// Password special characters.
pub const SPECIALS: Alphabet = Alphabet::new(b"!@#$%^&*?");

impl Alphabet {
    /// Creates an alphabet over the given symbols.
    ///
    /// # Panics
    ///
    /// Panics (at compile time for constants) if `symbols` is empty or
    /// contains a non-ASCII byte.
    pub const fn new(symbols: &'static [u8]) -> Self {
        assert!(!symbols.is_empty(), "alphabet must not be empty");
        let mut i = 0;
        while i < symbols.len() {
            assert!(symbols[i].is_ascii(), "alphabet must be ASCII");
            i += 1;
        }
        Self { symbols }
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed alphabet.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns true if `c` is one of this alphabet's symbols.
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.symbols.contains(&(c as u8))
    }

    /// Returns the symbol at `index`, if any.
    pub fn get(&self, index: usize) -> Option<char> {
        self.symbols.get(index).map(|&b| b as char)
    }

    /// Iterates over the symbols in order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().map(|&b| b as char)
    }

    /// Draws one symbol uniformly.
    pub fn draw<R: RandomSource + ?Sized>(&self, source: &mut R) -> Result<char, EntropyError> {
        Ok(source.pick(self.symbols)? as char)
    }
}
