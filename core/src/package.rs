use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrainingError};
use crate::models::{whole_count, Running, SportsWalking, Swimming, Training};
use crate::types::ActivityCode;

/// En rå pakke fra sensorene: kode + posisjonelle verdier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    #[serde(alias = "code", alias = "workoutType")]
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(workout_type: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }

    pub fn read(&self) -> Result<Training> {
        read_package(&self.workout_type, &self.data)
    }
}

// Tuppelform: ["RUN", [15000, 1, 75]]
#[derive(Debug, Deserialize)]
pub(crate) struct WorkoutPackageTuple(String, Vec<f64>);

// Prøv OBJECT først, deretter tuppel
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum WorkoutPackageIn {
    Object(WorkoutPackage),
    Tuple(WorkoutPackageTuple),
}

impl From<WorkoutPackageIn> for WorkoutPackage {
    fn from(p: WorkoutPackageIn) -> Self {
        match p {
            WorkoutPackageIn::Object(p) => p,
            WorkoutPackageIn::Tuple(WorkoutPackageTuple(workout_type, data)) => {
                WorkoutPackage { workout_type, data }
            }
        }
    }
}

/// Bygger riktig treningstype fra kode og posisjonelle verdier.
///
/// Rekkefølge per kode:
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
/// - `SWM`: action, duration, weight, length_pool, count_pool
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Training> {
    let code: ActivityCode = workout_type.parse()?;
    if data.len() != code.arity() {
        return Err(TrainingError::ArgumentCountMismatch {
            code: code.as_str(),
            expected: code.arity(),
            actual: data.len(),
        });
    }
    debug!("read_package: {} {:?}", code, data);

    let action = whole_count("action", data[0])?;
    let training: Training = match code {
        ActivityCode::Run => Running::new(action, data[1], data[2])?.into(),
        ActivityCode::Walk => SportsWalking::new(action, data[1], data[2], data[3])?.into(),
        ActivityCode::Swim => {
            let count_pool = whole_count("count_pool", data[4])?;
            Swimming::new(action, data[1], data[2], data[3], count_pool)?.into()
        }
    };
    Ok(training)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_and_object_forms_parse_the_same() {
        let obj: WorkoutPackageIn =
            serde_json::from_str(r#"{"workout_type":"RUN","data":[15000,1,75]}"#).unwrap();
        let tup: WorkoutPackageIn = serde_json::from_str(r#"["RUN",[15000,1,75]]"#).unwrap();
        assert_eq!(WorkoutPackage::from(obj), WorkoutPackage::from(tup));
    }

    #[test]
    fn code_alias_is_accepted() {
        let p: WorkoutPackageIn = serde_json::from_str(r#"{"code":"SWM","data":[1,1,1,1,1]}"#).unwrap();
        assert_eq!(WorkoutPackage::from(p).workout_type, "SWM");
    }

    #[test]
    fn fractional_lap_count_is_rejected() {
        let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]).unwrap_err();
        assert!(matches!(err, TrainingError::InvalidMeasurement { field: "count_pool", .. }));
    }
}
