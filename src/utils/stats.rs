//! # Distribution statistics
//!
//! Tools for checking that generated strings are uniformly distributed over the
//! alphabet, using a chi² goodness of fit test.
//!
//! ```rust
//! use randstr::utils::stats::{ChiSquaredBand, Frequencies, chi_squared};
//!
//! let mut frequencies = Frequencies::new();
//! for _ in 0..1000 {
//!     frequencies.record(&randstr::generate(100)?)?;
//! }
//!
//! let band = ChiSquaredBand::for_alphabet();
//! println!("chi² = {} ({} - {})", chi_squared(&frequencies), band.lower, band.upper);
//! # Ok::<(), randstr::RandstrError>(())
//! ```
use crate::alphabet::{self, ALPHABET, ALPHABET_LEN};
use crate::error::RandstrError;

/// Number of standard deviations either side of the degrees of freedom
const SIGMAS: f64 = 3.0;

/// Observed frequency of every alphabet character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frequencies {
    counts: [u64; ALPHABET_LEN],
}

impl Default for Frequencies {
    fn default() -> Self {
        Self::new()
    }
}

impl Frequencies {
    /// Empty frequency table
    pub fn new() -> Self {
        Self {
            counts: [0; ALPHABET_LEN],
        }
    }

    /// Count every character of `value`
    ///
    /// Fails without counting anything if `value` contains a character outside
    /// the alphabet.
    pub fn record(&mut self, value: &str) -> Result<(), RandstrError> {
        let mut counts = [0u64; ALPHABET_LEN];
        for c in value.chars() {
            let index = alphabet::index_of(c).ok_or_else(|| {
                RandstrError::InvalidData(format!(
                    "unknown character {:?} in value: {}",
                    c, value
                ))
            })?;
            counts[index] += 1;
        }

        for (total, count) in self.counts.iter_mut().zip(counts) {
            *total += count;
        }
        Ok(())
    }

    /// Number of times `c` has been seen
    pub fn count(&self, c: char) -> u64 {
        alphabet::index_of(c).map_or(0, |index| self.counts[index])
    }

    /// Total number of characters recorded
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterate over `(character, count)` pairs in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        ALPHABET
            .iter()
            .zip(self.counts.iter())
            .map(|(&c, &count)| (c as char, count))
    }
}

/// chi² statistic of the observed frequencies against a uniform distribution
///
/// `chi² = Σ((observed - expected)² / expected)` where the expected count of
/// every character is `total / 62`. Returns `0.0` for an empty table.
pub fn chi_squared(frequencies: &Frequencies) -> f64 {
    let total = frequencies.total();
    if total == 0 {
        return 0.0;
    }
    let expected = total as f64 / ALPHABET_LEN as f64;

    frequencies
        .counts
        .iter()
        .map(|&observed| (observed as f64 - expected).powi(2) / expected)
        .sum()
}

/// Acceptable range for a chi² statistic
///
/// `(df - 3 * sqrt(2 * df), df + 3 * sqrt(2 * df))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquaredBand {
    /// Degrees of freedom
    pub degrees: f64,
    /// Lower bound (exclusive)
    pub lower: f64,
    /// Upper bound (exclusive)
    pub upper: f64,
}

impl ChiSquaredBand {
    /// Band for a distribution over `categories` values
    pub fn new(categories: usize) -> Self {
        let degrees = categories.saturating_sub(1) as f64;
        let deviation = SIGMAS * (2.0 * degrees).sqrt();
        Self {
            degrees,
            lower: degrees - deviation,
            upper: degrees + deviation,
        }
    }

    /// Band for the 62 character alphabet (61 degrees of freedom)
    pub fn for_alphabet() -> Self {
        Self::new(ALPHABET_LEN)
    }

    /// Check the statistic falls strictly inside the band
    pub fn contains(&self, chi2: f64) -> bool {
        chi2 > self.lower && chi2 < self.upper
    }
}
