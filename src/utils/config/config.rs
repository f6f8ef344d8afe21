use super::{Config, GeneratorConfig};
use crate::error::RandstrError as Error;
use figment::{Figment, providers::Format};
use log::debug;
use std::path::PathBuf;

impl Config {
    /// Load the Configuration
    ///
    /// A missing file is not an error, defaults and environment variables are
    /// used instead.
    pub fn load(path: &PathBuf) -> Result<Self, Error> {
        debug!("Loading Configuration: {:?}", path);

        let figment = Figment::new()
            .merge(figment::providers::Yaml::file(path))
            .merge(figment::providers::Env::prefixed("RANDSTR_"));

        let mut config: Self = figment.extract()?;
        config.generator = GeneratorConfig::figment(&config.generator).extract()?;
        config.path = path.clone();

        debug!("Finished Loading Configuration");
        Ok(config)
    }

    /// Load the Configuration from a String
    pub fn load_str(data: impl Into<String>) -> Result<Self, Error> {
        let data = data.into();
        debug!("Loading Configuration from str");

        let figment = Figment::new()
            .merge(figment::providers::Yaml::string(&data))
            .merge(figment::providers::Env::prefixed("RANDSTR_"));

        let mut config: Self = figment.extract()?;
        config.generator = GeneratorConfig::figment(&config.generator).extract()?;
        Ok(config)
    }

    /// Save the Configuration
    pub fn save(&self, path: &PathBuf) -> Result<(), Error> {
        debug!("Saving Configuration: {:?}", path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let config = serde_yaml::to_string(self)?;
        std::fs::write(path, config)?;
        Ok(())
    }

    /// Write the Configuration back to the file it was loaded from
    ///
    /// Fails with [`Error::InvalidData`] when the Configuration was not loaded
    /// from a file.
    pub fn persist(&self) -> Result<(), Error> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::InvalidData(
                "configuration has no file path".to_string(),
            ));
        }
        self.save(&self.path)
    }

    /// Path the Configuration was loaded from
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Serialize the Configuration as YAML
    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the Configuration
    ///
    /// ```rust
    /// let mut config = randstr::Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.generator.max_length = Some(16);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), Error> {
        self.generator.validate()
    }
}
