//! # Generator
//!
//! Produces strings of an exact length drawn uniformly from the
//! [alphabet](crate::alphabet).
//!
//! Each character costs one random byte. Bytes at or above
//! [`ACCEPT_LIMIT`](crate::alphabet::ACCEPT_LIMIT) are thrown away and redrawn,
//! which keeps every character equally likely (`byte % 62` on its own would
//! favour the first eight characters).
use log::debug;

use crate::alphabet;
use crate::entropy::{EntropySource, OsEntropy};
use crate::error::GeneratorError;

/// Upper bound on the number of random bytes requested from the source at once
const MAX_CHUNK: usize = 1024;

/// Random String Generator
#[derive(Debug, Clone, Default)]
pub struct Generator<S = OsEntropy> {
    source: S,
}

impl Generator<OsEntropy> {
    /// Generator using the operating system entropy source
    pub fn os() -> Self {
        Self { source: OsEntropy }
    }
}

impl<S: EntropySource> Generator<S> {
    /// Create a new Generator drawing from the given entropy source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Get the entropy source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consume the Generator and return the entropy source
    pub fn into_source(self) -> S {
        self.source
    }

    /// Generate a random string of exactly `length` characters
    ///
    /// A `length` of zero returns an empty string without reading from the
    /// entropy source. If the source fails, the error is returned and nothing
    /// generated so far is kept.
    ///
    /// ```rust
    /// use randstr::Generator;
    ///
    /// let mut generator = Generator::os();
    /// let value = generator.generate(10)?;
    ///
    /// assert_eq!(value.len(), 10);
    /// # Ok::<(), randstr::GeneratorError>(())
    /// ```
    pub fn generate(&mut self, length: usize) -> Result<String, GeneratorError> {
        debug!("Generating random string of length {}", length);
        if length == 0 {
            return Ok(String::new());
        }

        let mut value = String::with_capacity(length);
        let mut buffer = vec![0u8; chunk_size(length)];

        while value.len() < length {
            let needed = length - value.len();
            let chunk = &mut buffer[..chunk_size(needed)];
            self.source.fill(chunk)?;

            value.extend(
                chunk
                    .iter()
                    .copied()
                    .filter_map(alphabet::select)
                    .take(needed),
            );
        }

        Ok(value)
    }

    /// Generate `count` random strings, each `length` characters long
    ///
    /// Stops at the first failure of the entropy source.
    pub fn generate_many(
        &mut self,
        count: usize,
        length: usize,
    ) -> Result<Vec<String>, GeneratorError> {
        debug!("Generating {} random strings of length {}", count, length);
        (0..count).map(|_| self.generate(length)).collect()
    }
}

/// Generate a random string of `length` characters using the OS entropy source
///
/// ```rust
/// let value = randstr::generate(1000)?;
/// assert_eq!(value.len(), 1000);
/// # Ok::<(), randstr::GeneratorError>(())
/// ```
pub fn generate(length: usize) -> Result<String, GeneratorError> {
    Generator::os().generate(length)
}

/// Bytes to request for `needed` characters, with headroom for rejected draws
fn chunk_size(needed: usize) -> usize {
    needed
        .saturating_add(needed / 16)
        .saturating_add(4)
        .min(MAX_CHUNK)
}
