use std::path::PathBuf;

use anyhow::Result;
use bee_builder::{build, DEFAULT_INPUT, DEFAULT_OUTPUT};
use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Builds the enriched puzzle archive from the raw word archive
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raw archive to read
    #[arg(long, env = "BEE_INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Enriched archive to write (replaced if it exists)
    #[arg(long, env = "BEE_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Seed for reproducible scrambled words
    #[arg(long, env = "BEE_SEED")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::from_rng(&mut rand::rng()),
    };

    let report = build(&cli.input, &cli.output, &mut rng)?;
    println!("{}", report);

    Ok(())
}
