use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrainingError;

/// Kode for treningstype slik sensorene sender den.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityCode {
    #[serde(rename = "RUN")]
    Run,
    #[serde(rename = "WLK")]
    Walk,
    #[serde(rename = "SWM")]
    Swim,
}

impl ActivityCode {
    pub const ALL: [ActivityCode; 3] = [ActivityCode::Run, ActivityCode::Walk, ActivityCode::Swim];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityCode::Run => "RUN",
            ActivityCode::Walk => "WLK",
            ActivityCode::Swim => "SWM",
        }
    }

    /// Antall posisjonelle verdier koden forventer.
    pub fn arity(self) -> usize {
        match self {
            ActivityCode::Run => 3,
            ActivityCode::Walk => 4,
            ActivityCode::Swim => 5,
        }
    }
}

impl FromStr for ActivityCode {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUN" => Ok(ActivityCode::Run),
            "WLK" => Ok(ActivityCode::Walk),
            "SWM" => Ok(ActivityCode::Swim),
            other => Err(TrainingError::InvalidActivityCode(other.to_string())),
        }
    }
}

impl fmt::Display for ActivityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Språk for ferdig melding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl FromStr for Language {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "ru" | "russian" => Ok(Language::Ru),
            _ => Err(TrainingError::UnknownOption {
                kind: "language",
                value: s.to_string(),
            }),
        }
    }
}

/// Informasjonsmelding om en gjennomført økt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64,  // timer
    pub distance: f64,  // km
    pub speed: f64,     // km/t
    pub calories: f64,  // kcal
}

impl InfoMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Ferdig tekstlinje med engelske etiketter.
    pub fn get_message(&self) -> String {
        crate::report::render(self)
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}
