//! # Randstr
//!
//! Randstr generates random strings drawn uniformly from a fixed 62 character
//! alphanumeric alphabet (`a-z`, `A-Z`, `0-9`).
//!
//! Random bytes come from a secure entropy source and are mapped onto the
//! alphabet using rejection sampling, so no character is favoured over another.
//!
//! ```rust
//! let token = randstr::generate(24)?;
//!
//! assert_eq!(token.len(), 24);
//! assert!(token.chars().all(randstr::alphabet::contains));
//! # Ok::<(), randstr::GeneratorError>(())
//! ```
#![deny(missing_docs, unused_imports)]
#![deny(unsafe_code)]

pub mod alphabet;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod utils;

pub use entropy::{EntropySource, OsEntropy, RngEntropy};
pub use error::{GeneratorError, RandstrError};
pub use generator::{Generator, generate};
pub use utils::config::Config;

/// Randstr Banner
pub const RANDSTR_BANNER: &str = r#"                     _     _
 _ __ __ _ _ __   __| |___| |_ _ __
| '__/ _` | '_ \ / _` / __| __| '__|
| | | (_| | | | | (_| \__ \ |_| |
|_|  \__,_|_| |_|\__,_|___/\__|_|"#;

/// Randstr Version
pub const RANDSTR_VERSION: &str = env!("CARGO_PKG_VERSION");
