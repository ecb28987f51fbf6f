use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::package::read_package;
use crate::report::render_localized;
use crate::types::Language;
use crate::TrainingError;

fn to_py_err(e: TrainingError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Tekstmelding for en pakke, f.eks. `read_package_message("RUN", [15000, 1, 75], "ru")`.
#[pyfunction]
#[pyo3(signature = (workout_type, data, lang = None))]
fn read_package_message(workout_type: &str, data: Vec<f64>, lang: Option<&str>) -> PyResult<String> {
    let language = match lang {
        Some(l) => l.parse::<Language>().map_err(to_py_err)?,
        None => Language::default(),
    };
    let training = read_package(workout_type, &data).map_err(to_py_err)?;
    Ok(render_localized(&training.show_training_info(), language))
}

/// InfoMessage som JSON-streng (Python-siden gjør json.loads selv).
#[pyfunction]
fn training_info_json(workout_type: &str, data: Vec<f64>) -> PyResult<String> {
    let training = read_package(workout_type, &data).map_err(to_py_err)?;
    serde_json::to_string(&training.show_training_info())
        .map_err(|e| PyValueError::new_err(format!("failed to serialize InfoMessage: {e}")))
}

pub(crate) fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(read_package_message, m)?)?;
    m.add_function(wrap_pyfunction!(training_info_json, m)?)?;
    Ok(())
}
