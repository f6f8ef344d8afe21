use std::io::Write;

use log::{debug, info};
use randstr::{Config, RandstrError};

pub fn run(config: &Config) -> Result<(), RandstrError> {
    let values = config.generator.generate()?;
    debug!("Generated {} value(s)", values.len());

    let stdout = std::io::stdout();
    write_values(&mut stdout.lock(), &values)?;
    info!(
        "Generated {} string(s) of length {}",
        values.len(),
        config.generator.length
    );
    Ok(())
}

/// Write one value per line
fn write_values(out: &mut impl Write, values: &[String]) -> Result<(), RandstrError> {
    for value in values {
        writeln!(out, "{}", value)?;
    }
    out.flush()?;
    Ok(())
}
