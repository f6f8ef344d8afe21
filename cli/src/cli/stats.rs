use anyhow::{Result, anyhow};
use log::{debug, info};
use randstr::{
    EntropySource, Generator,
    utils::stats::{ChiSquaredBand, Frequencies, chi_squared},
};

pub fn run(samples: usize, length: usize) -> Result<()> {
    run_with(&mut Generator::os(), samples, length)
}

fn run_with<S: EntropySource>(
    generator: &mut Generator<S>,
    samples: usize,
    length: usize,
) -> Result<()> {
    if samples == 0 || length == 0 {
        return Err(anyhow!("Samples and length must both be at least 1"));
    }
    info!("Sampling {} strings of length {}", samples, length);

    let mut frequencies = Frequencies::new();
    for _ in 0..samples {
        frequencies.record(&generator.generate(length)?)?;
    }

    for (c, count) in frequencies.iter() {
        debug!(" > {} : {}", c, count);
    }

    let chi2 = chi_squared(&frequencies);
    let band = ChiSquaredBand::for_alphabet();

    info!("----- {:^26} -----", "Distribution");
    info!(" > {:<24}: {}", "Characters", frequencies.total());
    info!(" > {:<24}: {}", "Degrees of freedom", band.degrees);
    info!(" > {:<24}: {:.3}", "chi²", chi2);
    info!(" > {:<24}: ({:.3}, {:.3})", "Expected range", band.lower, band.upper);

    if band.contains(chi2) {
        info!("Distribution is uniform");
        Ok(())
    } else {
        Err(anyhow!(
            "Distribution is not uniform, chi² = {:.3}, expected value between {:.3} and {:.3}",
            chi2,
            band.lower,
            band.upper
        ))
    }
}
