#![deny(unsafe_code)]

use anyhow::Result;
use log::{debug, info, warn};

mod cli;

use cli::{ArgumentCommands, init, update_config};
use randstr::Config;

fn main() -> Result<()> {
    let arguments = init();

    let mut config = match Config::load(&arguments.config) {
        Ok(config) => config,
        Err(error) => {
            warn!("Failed to load configuration: {}", error);
            Config::default()
        }
    };
    update_config(&mut config, &arguments);
    debug!("Configuration: {:?}", config);

    match arguments.commands {
        Some(ArgumentCommands::Generate { .. }) | None => Ok(cli::generate::run(&config)?),
        Some(ArgumentCommands::Stats { samples, length }) => cli::stats::run(samples, length),
        Some(ArgumentCommands::Config { save }) => {
            config.validate()?;
            print!("{}", config.to_yaml()?);
            if save {
                config.persist()?;
                info!("Saved configuration to {:?}", config.path());
            }
            Ok(())
        }
    }
}
