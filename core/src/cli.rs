use std::str::FromStr;

use log::warn;

use crate::error::{Result, TrainingError};
use crate::package::WorkoutPackage;
use crate::report::render_localized;
use crate::types::{InfoMessage, Language};

/// Utskriftsformat for driveren.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = TrainingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(TrainingError::UnknownOption {
                kind: "format",
                value: s.to_string(),
            }),
        }
    }
}

/// Eksempelpakker som kjøres når ingen fil er oppgitt.
pub fn sample_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

pub fn format_info(info: &InfoMessage, language: Language, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_localized(info, language)),
        OutputFormat::Json => Ok(serde_json::to_string(info)?),
    }
}

fn run_package(index: usize, package: &WorkoutPackage, language: Language, format: OutputFormat) -> Result<String> {
    let training = package.read().map_err(|e| {
        warn!("package #{index} ({}) rejected: {e}", package.workout_type);
        e
    })?;
    format_info(&training.show_training_info(), language, format)
}

/// Kjører pakkene i rekkefølge og stopper på første ugyldige pakke.
pub fn run_packages(
    packages: &[WorkoutPackage],
    language: Language,
    format: OutputFormat,
) -> Result<Vec<String>> {
    packages
        .iter()
        .enumerate()
        .map(|(i, p)| run_package(i, p, language, format))
        .collect()
}

/// Skriver en linje per pakke til stdout etter hvert som de beregnes.
pub fn print_training_report(
    packages: &[WorkoutPackage],
    language: Language,
    format: OutputFormat,
) -> Result<()> {
    for (i, package) in packages.iter().enumerate() {
        println!("{}", run_package(i, package, language, format)?);
    }
    Ok(())
}
