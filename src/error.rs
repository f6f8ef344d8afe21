//! # Randstr Error
use thiserror::Error;

/// Generator Error
///
/// The only way generating a string can fail is the entropy source not
/// being able to supply random bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Random Source Error
    #[error("Random source error: {0}")]
    RandomSource(String),
}

/// Randstr Error
#[derive(Error, Debug)]
pub enum RandstrError {
    /// Generator Error
    #[error("{0}")]
    Generator(#[from] GeneratorError),

    /// IO Error
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
    /// Yaml Error
    #[error("Yaml Error: {0}")]
    YamlError(#[from] serde_yaml::Error),
    /// Figment Error
    #[error("Figment Error: {0}")]
    FigmentError(#[from] figment::Error),

    /// Invalid Data
    #[error("Invalid Data: {0}")]
    InvalidData(String),
}
