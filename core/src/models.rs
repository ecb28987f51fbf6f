use crate::error::{Result, TrainingError};
use crate::metrics::{
    distance_km, mean_speed_kmh, pool_speed_kmh, running_calories, swimming_calories,
    walking_calories, LEN_STEP_STRIDE, LEN_STEP_STROKE,
};
use crate::types::{ActivityCode, InfoMessage};

/// Felles kontrakt for alle treningstyper.
///
/// `get_spent_calories` har ingen default: hver type må ha sin egen formel.
pub trait Workout {
    /// Navnet som havner i meldingen.
    const NAME: &'static str;
    /// Meter per bevegelse (skritt eller tak).
    const LEN_STEP: f64;

    fn action(&self) -> u32;
    fn duration(&self) -> f64;
    fn weight(&self) -> f64;

    fn get_spent_calories(&self) -> f64;

    fn get_distance(&self) -> f64 {
        distance_km(self.action(), Self::LEN_STEP)
    }

    fn get_mean_speed(&self) -> f64 {
        mean_speed_kmh(self.get_distance(), self.duration())
    }

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            Self::NAME,
            self.duration(),
            self.get_distance(),
            self.get_mean_speed(),
            self.get_spent_calories(),
        )
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(TrainingError::InvalidMeasurement { field, value, reason: "must be finite" });
    }
    if value <= 0.0 {
        return Err(TrainingError::InvalidMeasurement { field, value, reason: "must be greater than zero" });
    }
    Ok(value)
}

/// Teller (skritt, tak, lengder) må være et ikke-negativt heltall innenfor u32.
pub(crate) fn whole_count(field: &'static str, value: f64) -> Result<u32> {
    if !value.is_finite() {
        return Err(TrainingError::InvalidMeasurement { field, value, reason: "must be finite" });
    }
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(TrainingError::InvalidMeasurement {
            field,
            value,
            reason: "must be a non-negative whole number",
        });
    }
    Ok(value as u32)
}

/// Løping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    action: u32,
    duration: f64, // timer
    weight: f64,   // kg
}

impl Running {
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self> {
        Ok(Self {
            action,
            duration: positive("duration", duration)?,
            weight: positive("weight", weight)?,
        })
    }
}

impl Workout for Running {
    const NAME: &'static str = "Running";
    const LEN_STEP: f64 = LEN_STEP_STRIDE;

    fn action(&self) -> u32 { self.action }
    fn duration(&self) -> f64 { self.duration }
    fn weight(&self) -> f64 { self.weight }

    fn get_spent_calories(&self) -> f64 {
        running_calories(self.get_mean_speed(), self.weight, self.duration)
    }
}

/// Sportsgange.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    action: u32,
    duration: f64,
    weight: f64,
    height: f64, // cm
}

impl SportsWalking {
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Result<Self> {
        Ok(Self {
            action,
            duration: positive("duration", duration)?,
            weight: positive("weight", weight)?,
            height: positive("height", height)?,
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Workout for SportsWalking {
    const NAME: &'static str = "SportsWalking";
    const LEN_STEP: f64 = LEN_STEP_STRIDE;

    fn action(&self) -> u32 { self.action }
    fn duration(&self) -> f64 { self.duration }
    fn weight(&self) -> f64 { self.weight }

    fn get_spent_calories(&self) -> f64 {
        walking_calories(self.get_mean_speed(), self.weight, self.height, self.duration)
    }
}

/// Svømming i basseng.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    action: u32,
    duration: f64,
    weight: f64,
    length_pool: f64, // meter
    count_pool: u32,
}

impl Swimming {
    pub fn new(action: u32, duration: f64, weight: f64, length_pool: f64, count_pool: u32) -> Result<Self> {
        Ok(Self {
            action,
            duration: positive("duration", duration)?,
            weight: positive("weight", weight)?,
            length_pool: positive("length_pool", length_pool)?,
            count_pool,
        })
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Workout for Swimming {
    const NAME: &'static str = "Swimming";
    const LEN_STEP: f64 = LEN_STEP_STROKE;

    fn action(&self) -> u32 { self.action }
    fn duration(&self) -> f64 { self.duration }
    fn weight(&self) -> f64 { self.weight }

    // Fart fra bassenglengder, antall tak brukes bare til distanse.
    fn get_mean_speed(&self) -> f64 {
        pool_speed_kmh(self.length_pool, self.count_pool, self.duration)
    }

    fn get_spent_calories(&self) -> f64 {
        swimming_calories(self.get_mean_speed(), self.weight)
    }
}

/// Lukket sett av treningstyper; `read_package` returnerer alltid en av disse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

macro_rules! each_training {
    ($self:expr, $t:ident => $body:expr) => {
        match $self {
            Training::Running($t) => $body,
            Training::SportsWalking($t) => $body,
            Training::Swimming($t) => $body,
        }
    };
}

impl Training {
    pub fn code(&self) -> ActivityCode {
        match self {
            Training::Running(_) => ActivityCode::Run,
            Training::SportsWalking(_) => ActivityCode::Walk,
            Training::Swimming(_) => ActivityCode::Swim,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Training::Running(_) => Running::NAME,
            Training::SportsWalking(_) => SportsWalking::NAME,
            Training::Swimming(_) => Swimming::NAME,
        }
    }

    pub fn get_distance(&self) -> f64 {
        each_training!(self, t => t.get_distance())
    }

    pub fn get_mean_speed(&self) -> f64 {
        each_training!(self, t => t.get_mean_speed())
    }

    pub fn get_spent_calories(&self) -> f64 {
        each_training!(self, t => t.get_spent_calories())
    }

    pub fn show_training_info(&self) -> InfoMessage {
        each_training!(self, t => t.show_training_info())
    }
}

impl From<Running> for Training {
    fn from(t: Running) -> Self {
        Training::Running(t)
    }
}

impl From<SportsWalking> for Training {
    fn from(t: SportsWalking) -> Self {
        Training::SportsWalking(t)
    }
}

impl From<Swimming> for Training {
    fn from(t: Swimming) -> Self {
        Training::Swimming(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_is_rejected() {
        let err = Running::new(1000, 0.0, 70.0).unwrap_err();
        assert!(matches!(err, TrainingError::InvalidMeasurement { field: "duration", .. }));
    }

    #[test]
    fn zero_height_is_rejected() {
        let err = SportsWalking::new(1000, 1.0, 70.0, 0.0).unwrap_err();
        assert!(matches!(err, TrainingError::InvalidMeasurement { field: "height", .. }));
    }

    #[test]
    fn nan_weight_is_rejected() {
        let err = Swimming::new(10, 1.0, f64::NAN, 25.0, 4).unwrap_err();
        assert!(matches!(err, TrainingError::InvalidMeasurement { field: "weight", .. }));
    }

    #[test]
    fn whole_count_rejects_fractions_and_negatives() {
        assert_eq!(whole_count("action", 720.0).unwrap(), 720);
        assert!(whole_count("action", 1.5).is_err());
        assert!(whole_count("action", -1.0).is_err());
        assert!(whole_count("action", f64::INFINITY).is_err());
    }

    #[test]
    fn enum_names_match_variants() {
        let t: Training = Running::new(1, 1.0, 1.0).unwrap().into();
        assert_eq!(t.name(), "Running");
        assert_eq!(t.code(), ActivityCode::Run);
        assert_eq!(t.show_training_info().training_type, "Running");
    }
}
