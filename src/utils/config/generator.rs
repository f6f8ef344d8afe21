use super::GeneratorConfig;
use crate::entropy::EntropySource;
use crate::error::RandstrError;
use crate::generator::Generator;

impl GeneratorConfig {
    /// Validate the Generator Configuration
    pub fn validate(&self) -> Result<(), RandstrError> {
        if self.count == 0 {
            return Err(RandstrError::InvalidData(
                "count must be at least 1".to_string(),
            ));
        }
        if let Some(max_length) = self.max_length {
            if self.length > max_length {
                return Err(RandstrError::InvalidData(format!(
                    "length {} exceeds the maximum length of {}",
                    self.length, max_length
                )));
            }
        }
        Ok(())
    }

    /// Generate `count` strings of `length` characters using the OS entropy source
    pub fn generate(&self) -> Result<Vec<String>, RandstrError> {
        self.generate_with(&mut Generator::os())
    }

    /// Generate `count` strings of `length` characters using the given Generator
    pub fn generate_with<S: EntropySource>(
        &self,
        generator: &mut Generator<S>,
    ) -> Result<Vec<String>, RandstrError> {
        self.validate()?;
        log::debug!(
            "Generating {} value(s) of length {}",
            self.count,
            self.length
        );
        Ok(generator.generate_many(self.count, self.length)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneratorError;

    struct BrokenSource;

    impl EntropySource for BrokenSource {
        fn fill(&mut self, _buf: &mut [u8]) -> Result<(), GeneratorError> {
            Err(GeneratorError::RandomSource("read failure".to_string()))
        }
    }

    #[test]
    fn test_validate() {
        let mut config = GeneratorConfig::default();
        assert!(config.validate().is_ok());

        config.max_length = Some(config.length);
        assert!(config.validate().is_ok());

        config.length += 1;
        assert!(matches!(
            config.validate(),
            Err(RandstrError::InvalidData(_))
        ));

        let config = GeneratorConfig {
            count: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RandstrError::InvalidData(_))
        ));
    }

    #[test]
    fn test_generate() -> Result<(), RandstrError> {
        let config = GeneratorConfig {
            length: 18,
            count: 4,
            max_length: None,
        };

        let values = config.generate()?;
        assert_eq!(values.len(), 4);
        assert!(values.iter().all(|value| value.len() == 18));
        Ok(())
    }

    #[test]
    fn test_generate_invalid() {
        let config = GeneratorConfig {
            length: 100,
            count: 1,
            max_length: Some(10),
        };
        assert!(config.generate().is_err());
    }

    #[test]
    fn test_generate_source_failure() {
        let config = GeneratorConfig::default();
        let result = config.generate_with(&mut Generator::new(BrokenSource));

        assert!(matches!(
            result,
            Err(RandstrError::Generator(GeneratorError::RandomSource(_)))
        ));
    }
}
