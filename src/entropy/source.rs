//! Uniform selection over bounded ranges.
//!
//! Indices are produced by rejection sampling over 64-bit draws so that
//! every value in `[0, n)` is equally likely, whatever `n` is.

use super::EntropyError;
use rand_chacha::ChaCha20Rng;
use rand_core::{OsRng, RngCore, SeedableRng};
use std::fmt;

/// Capability for uniform random selection.
///
/// Implementors only provide [`uniform_index`](RandomSource::uniform_index);
/// picking from a table and flipping a coin are derived from it, so a
/// deterministic stub controls every decision a generator makes.
pub trait RandomSource {
    /// Returns an index uniformly distributed in `[0, n)`.
    fn uniform_index(&mut self, n: usize) -> Result<usize, EntropyError>;

    /// Returns a uniformly chosen element of `items`.
    fn pick<T: Copy>(&mut self, items: &[T]) -> Result<T, EntropyError> {
        let index = self.uniform_index(items.len())?;
        Ok(items[index])
    }

    /// Returns `true` with probability one half.
    fn uniform_bool(&mut self) -> Result<bool, EntropyError> {
        Ok(self.uniform_index(2)? == 0)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform_index(&mut self, n: usize) -> Result<usize, EntropyError> {
        (**self).uniform_index(n)
    }
}

/// Draws an unbiased index in `[0, n)` from any byte source.
pub(crate) fn index_from_rng<R: RngCore + ?Sized>(
    rng: &mut R,
    n: usize,
) -> Result<usize, EntropyError> {
    if n == 0 {
        return Err(EntropyError::EmptyRange);
    }

    let bound = n as u64;
    // Largest accepted value; `zone + 1` is a multiple of `bound`.
    let zone = u64::MAX - (u64::MAX - bound + 1) % bound;

    loop {
        let mut buf = [0u8; 8];
        rng.try_fill_bytes(&mut buf)
            .map_err(|e| EntropyError::Unavailable(e.to_string()))?;
        let value = u64::from_le_bytes(buf);
        if value <= zone {
            return Ok((value % bound) as usize);
        }
    }
}

/// Randomness read directly from the operating system CSPRNG.
///
/// This is the only source password and identifier generators use by
/// default. It holds no state, so copies can be shared freely between
/// threads; concurrency safety is the OS backend's concern.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureRandom;

impl SecureRandom {
    /// Creates a handle to the OS generator.
    pub fn new() -> Self {
        Self
    }

    /// Performs one draw to confirm the backend is reachable.
    pub fn probe(&self) -> Result<(), EntropyError> {
        let mut buf = [0u8; 8];
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| EntropyError::Unavailable(e.to_string()))
    }
}

impl RandomSource for SecureRandom {
    fn uniform_index(&mut self, n: usize) -> Result<usize, EntropyError> {
        index_from_rng(&mut OsRng, n)
    }
}

/// ChaCha20 stream seeded once.
///
/// Used where output is not security-sensitive (nicknames) and in tests
/// that need reproducible sequences from a known seed.
pub struct SeededRandom {
    inner: ChaCha20Rng,
}

impl SeededRandom {
    /// Creates a stream from a full 256-bit seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: ChaCha20Rng::from_seed(seed),
        }
    }

    /// Creates a stream from a short seed, expanded by `seed_from_u64`.
    pub fn from_u64(seed: u64) -> Self {
        Self {
            inner: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Creates a stream seeded from the OS entropy source.
    pub fn from_os_entropy() -> Result<Self, EntropyError> {
        let inner =
            ChaCha20Rng::from_rng(OsRng).map_err(|e| EntropyError::Unavailable(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl fmt::Debug for SeededRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededRandom").finish_non_exhaustive()
    }
}

impl RandomSource for SeededRandom {
    fn uniform_index(&mut self, n: usize) -> Result<usize, EntropyError> {
        index_from_rng(&mut self.inner, n)
    }
}
