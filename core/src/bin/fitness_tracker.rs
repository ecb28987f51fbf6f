//! Kjører treningspakker gjennom kalkulatoren og skriver én linje per pakke.
//!
//! ```bash
//! # Eksempelpakkene (SWM, RUN, WLK)
//! fitness-tracker
//!
//! # Pakker fra fil, russiske etiketter
//! fitness-tracker --input packages.json --lang ru
//!
//! # JSON-utdata, med debug-logging
//! RUST_LOG=debug fitness-tracker --format json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use fitness_tracker_core::{load_packages, print_training_report, sample_packages, Language, OutputFormat};

#[derive(Parser)]
#[command(
    name = "fitness-tracker",
    about = "Workout distance, speed and calorie calculator",
    long_about = "Converts raw workout packages (RUN, WLK, SWM) into distance, mean speed and calorie reports."
)]
struct Cli {
    /// JSON file with packages; runs the built-in samples when omitted
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Report labels: en | ru
    #[arg(long, default_value = "en")]
    lang: Language,

    /// Output format: text | json
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let packages = match &cli.input {
        Some(path) => load_packages(path)
            .with_context(|| format!("could not load packages from {}", path.display()))?,
        None => {
            info!("no --input given, running sample packages");
            sample_packages()
        }
    };

    print_training_report(&packages, cli.lang, cli.format).context("workout package rejected")?;
    Ok(())
}
