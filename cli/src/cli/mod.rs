use clap::{Parser, Subcommand};
use console::style;
use randstr::{Config, RANDSTR_BANNER, RANDSTR_VERSION};
use std::path::PathBuf;

pub mod generate;
pub mod stats;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Enable Debugging
    #[clap(long, env, default_value_t = false)]
    pub debug: bool,

    /// Disable Banner
    #[clap(long, default_value_t = false)]
    pub disable_banner: bool,

    /// Configuration file path
    #[clap(short, long, env = "RANDSTR_CONFIG", default_value = "./randstr.yml")]
    pub config: PathBuf,

    /// Subcommands
    #[clap(subcommand)]
    pub commands: Option<ArgumentCommands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ArgumentCommands {
    /// Generate random strings (default)
    Generate {
        /// Length of each string
        #[clap(short, long)]
        length: Option<usize>,
        /// Number of strings to generate
        #[clap(short = 'n', long)]
        count: Option<usize>,
    },
    /// Check the character distribution of generated strings
    Stats {
        /// Number of strings to sample
        #[clap(short, long, default_value_t = 10000)]
        samples: usize,
        /// Length of each sampled string
        #[clap(short, long, default_value_t = 100)]
        length: usize,
    },
    /// Show the loaded configuration
    Config {
        /// Write the configuration back to the config file
        #[clap(long, default_value_t = false)]
        save: bool,
    },
}

pub fn init() -> Arguments {
    let arguments = Arguments::parse();

    let log_level = match &arguments.debug {
        false => log::LevelFilter::Info,
        true => log::LevelFilter::Debug,
    };

    env_logger::builder()
        .parse_default_env()
        .format_module_path(false)
        .filter_level(log_level)
        .init();

    if !arguments.disable_banner {
        eprintln!(
            "{}    by {} - v{}\n",
            style(RANDSTR_BANNER).green(),
            style(AUTHOR).red(),
            style(RANDSTR_VERSION).blue()
        );
    }

    arguments
}

/// Apply command line overrides on top of the loaded configuration
pub fn update_config(config: &mut Config, arguments: &Arguments) {
    if let Some(ArgumentCommands::Generate { length, count }) = &arguments.commands {
        if let Some(length) = length {
            config.generator.length = *length;
        }
        if let Some(count) = count {
            config.generator.count = *count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arguments(commands: Option<ArgumentCommands>) -> Arguments {
        Arguments {
            debug: false,
            disable_banner: true,
            config: PathBuf::from("./randstr.yml"),
            commands,
        }
    }

    #[test]
    fn test_update_config_generate() -> Result<(), randstr::RandstrError> {
        let mut config = Config::load_str("generator:\n  length: 12\n  count: 3\n")?;
        let arguments = arguments(Some(ArgumentCommands::Generate {
            length: Some(40),
            count: Some(5),
        }));

        update_config(&mut config, &arguments);

        assert_eq!(config.generator.length, 40);
        assert_eq!(config.generator.count, 5);
        Ok(())
    }

    #[test]
    fn test_update_config_partial() -> Result<(), randstr::RandstrError> {
        let mut config = Config::load_str("generator:\n  length: 12\n  count: 3\n")?;
        let arguments = arguments(Some(ArgumentCommands::Generate {
            length: None,
            count: Some(8),
        }));

        update_config(&mut config, &arguments);

        assert_eq!(config.generator.length, 12);
        assert_eq!(config.generator.count, 8);
        Ok(())
    }

    #[test]
    fn test_update_config_other_commands() {
        let mut config = Config::default();
        let before = config.generator.clone();

        update_config(&mut config, &arguments(None));
        update_config(
            &mut config,
            &arguments(Some(ArgumentCommands::Stats {
                samples: 10,
                length: 500,
            })),
        );

        assert_eq!(config.generator, before);
    }

    #[test]
    fn test_parse_arguments() {
        let arguments = Arguments::parse_from([
            "randstr",
            "--disable-banner",
            "generate",
            "--length",
            "24",
            "-n",
            "2",
        ]);

        assert!(matches!(
            arguments.commands,
            Some(ArgumentCommands::Generate {
                length: Some(24),
                count: Some(2)
            })
        ));
    }
}
