use crate::error::{Result, TrainingError};
use crate::package::{WorkoutPackage, WorkoutPackageIn};
use log::info;
use serde_path_to_error as spte;
use std::path::Path;

/// Parser en JSON-liste med pakker (objekt- eller tuppelform).
pub fn parse_packages(json_str: &str) -> Result<Vec<WorkoutPackage>> {
    let mut de = serde_json::Deserializer::from_str(json_str);
    let raw: Vec<WorkoutPackageIn> = spte::deserialize(&mut de).map_err(|e| TrainingError::Parse {
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })?;
    // ingen søppel etter lista
    de.end().map_err(|e| TrainingError::Parse {
        path: ".".to_string(),
        message: e.to_string(),
    })?;
    Ok(raw.into_iter().map(WorkoutPackage::from).collect())
}

/// Leser inn pakker fra disk (JSON).
/// Mangler filen er det en feil, ikke en tom liste.
pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<WorkoutPackage>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| TrainingError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let packages = parse_packages(&contents)?;
    info!("loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}
