pub mod cli;
pub mod error;
pub mod metrics;
pub mod models;
pub mod package;
pub mod report;
pub mod storage;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use crate::cli::{print_training_report, run_packages, sample_packages, OutputFormat};
pub use crate::error::TrainingError;
pub use crate::models::{Running, SportsWalking, Swimming, Training, Workout};
pub use crate::package::{read_package, WorkoutPackage};
pub use crate::report::{render, render_localized};
pub use crate::storage::{load_packages, parse_packages};
pub use crate::types::{ActivityCode, InfoMessage, Language};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn fitness_tracker_core(_py: Python, m: &PyModule) -> PyResult<()> {
    py::register(m)
}
