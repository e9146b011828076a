//! Pronounceable nicknames.
//!
//! Nicknames are grown syllable by syllable, alternating consonant and
//! vowel families, then closed with a short ending. The output is not
//! security-sensitive, so the default source is a seeded ChaCha stream
//! rather than direct OS reads.

mod phonetic;
mod tokens;

pub use phonetic::{is_nickname, PhoneticNicknameGenerator, BODY_LEN, NICKNAME_LEN};
pub use tokens::{Phoneme, TokenList, CONSONANTS, ENDINGS, VOWELS};
