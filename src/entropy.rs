//! # Entropy sources
//!
//! The generator never reaches for a global random number generator. It is
//! handed an [`EntropySource`] instead, which lets tests swap in fixed or
//! failing sources.
use rand::{CryptoRng, RngCore, TryRngCore, rngs::OsRng};

use crate::error::GeneratorError;

/// A secure source of random bytes
pub trait EntropySource {
    /// Fill `buf` entirely with random bytes.
    ///
    /// On error the contents of `buf` are unspecified and must not be used.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), GeneratorError>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), GeneratorError> {
        (**self).fill(buf)
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), GeneratorError> {
        (**self).fill(buf)
    }
}

/// Operating system entropy source
///
/// Stateless handle on the platform's secure random byte provider. It is
/// cheap to copy and safe to use from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), GeneratorError> {
        OsRng.try_fill_bytes(buf).map_err(|e| {
            log::warn!("Failed to read from the OS entropy source: {}", e);
            GeneratorError::RandomSource(e.to_string())
        })
    }
}

/// Entropy source backed by any cryptographically secure `rand` RNG
///
/// ```rust
/// use rand::{SeedableRng, rngs::StdRng};
/// use randstr::{Generator, RngEntropy};
///
/// let mut first = Generator::new(RngEntropy::new(StdRng::seed_from_u64(42)));
/// let mut second = Generator::new(RngEntropy::new(StdRng::seed_from_u64(42)));
///
/// assert_eq!(first.generate(16)?, second.generate(16)?);
/// # Ok::<(), randstr::GeneratorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RngEntropy<R> {
    rng: R,
}

impl<R: CryptoRng> RngEntropy<R> {
    /// Wrap a RNG
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Get the wrapped RNG back
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: CryptoRng> EntropySource for RngEntropy<R> {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), GeneratorError> {
        RngCore::fill_bytes(&mut self.rng, buf);
        Ok(())
    }
}
