//! Syllable tables.

use crate::entropy::{EntropyError, RandomSource};

/// Consonant or vowel family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phoneme {
    /// Tokens from [`CONSONANTS`].
    Consonant,
    /// Tokens from [`VOWELS`].
    Vowel,
}

impl Phoneme {
    /// The family that must follow this one.
    pub fn opposite(self) -> Self {
        match self {
            Phoneme::Consonant => Phoneme::Vowel,
            Phoneme::Vowel => Phoneme::Consonant,
        }
    }
}

/// An ordered, immutable list of lowercase ASCII tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenList {
    tokens: &'static [&'static str],
}

/// Consonant tokens, single letters first, then digraphs.
pub const CONSONANTS: TokenList = TokenList::new(&[
    "b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "n", "p", "r", "s", "t", "v", "w", "y", "z",
    "th", "sh", "ch", "ph", "qu",
]);

/// Vowel tokens. `y` doubles as a vowel here but classifies as a consonant.
pub const VOWELS: TokenList =
    TokenList::new(&["a", "e", "i", "o", "u", "y", "ai", "ei", "ou", "ie", "ea"]);

/// Name endings appended after the body.
pub const ENDINGS: TokenList = TokenList::new(&[
    "an", "el", "or", "in", "us", "ar", "on", "en", "is", "ion", "ius", "ara",
]);

impl TokenList {
    /// Wraps a static token table.
    ///
    /// # Panics
    ///
    /// Panics (at compile time for constants) on an empty list or an empty
    /// token.
    pub const fn new(tokens: &'static [&'static str]) -> Self {
        assert!(!tokens.is_empty(), "token list must not be empty");
        let mut i = 0;
        while i < tokens.len() {
            assert!(!tokens[i].is_empty(), "tokens must not be empty");
            i += 1;
        }
        Self { tokens }
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tokens.iter().copied()
    }

    /// Returns true if `c` is itself a token of this list.
    pub fn contains_char(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        let needle: &str = c.encode_utf8(&mut buf);
        self.tokens.iter().any(|&token| token == needle)
    }

    /// Draws one token uniformly.
    pub fn draw<R: RandomSource + ?Sized>(
        &self,
        source: &mut R,
    ) -> Result<&'static str, EntropyError> {
        source.pick(self.tokens)
    }

    /// Draws tokens until one does not start with `previous`.
    ///
    /// Every table holds tokens with several distinct leading letters, so
    /// this terminates with probability one.
    pub fn draw_not_starting_with<R: RandomSource + ?Sized>(
        &self,
        source: &mut R,
        previous: char,
    ) -> Result<&'static str, EntropyError> {
        loop {
            let token = self.draw(source)?;
            if !token.starts_with(previous) {
                return Ok(token);
            }
            tracing::trace!(token = token, previous = %previous, "Rejected token repeating previous letter");
        }
    }
}
