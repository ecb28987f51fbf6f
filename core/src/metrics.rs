//! Lukkede formler for distanse, snittfart og kalorier.
//!
//! Funksjonene er rene og tar ferdig utledet fart inn, slik at hver
//! treningstype kan settes sammen i `models.rs`.

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Skrittlengde (m) for løp og gange.
pub const LEN_STEP_STRIDE: f64 = 0.65;
/// Taklengde (m) for svømming.
pub const LEN_STEP_STROKE: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Gulvdivisjon for flyttall.
///
/// Går via `fmod` og runder kvotienten på samme måte som `//`-operatoren i
/// referanseprogrammet, så resultatet blir bit-likt også når `a / b` ligger
/// rett under et heltall.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let m = a % b;
    let mut div = (a - m) / b;
    if m != 0.0 && ((b < 0.0) != (m < 0.0)) {
        div -= 1.0;
    }
    if div != 0.0 {
        let mut floordiv = div.floor();
        if div - floordiv > 0.5 {
            floordiv += 1.0;
        }
        floordiv
    } else {
        (0.0f64).copysign(a / b)
    }
}

/// Distanse (km) = antall bevegelser * lengde / 1000.
#[inline]
pub fn distance_km(action: u32, len_step_m: f64) -> f64 {
    f64::from(action) * len_step_m / M_IN_KM
}

/// Snittfart (km/t) for skritt/tak-baserte økter.
#[inline]
pub fn mean_speed_kmh(distance_km: f64, duration_h: f64) -> f64 {
    distance_km / duration_h
}

/// Snittfart i basseng: lengde * antall lengder, uavhengig av antall tak.
#[inline]
pub fn pool_speed_kmh(length_pool_m: f64, count_pool: u32, duration_h: f64) -> f64 {
    length_pool_m * f64::from(count_pool) / M_IN_KM / duration_h
}

pub fn running_calories(mean_speed: f64, weight_kg: f64, duration_h: f64) -> f64 {
    (RUN_SPEED_MULTIPLIER * mean_speed - RUN_SPEED_SHIFT) * weight_kg / M_IN_KM
        * MIN_IN_H
        * duration_h
}

/// Kcal for sportsgange. `speed^2 / height` er gulvdivisjon, ikke vanlig divisjon.
pub fn walking_calories(mean_speed: f64, weight_kg: f64, height_cm: f64, duration_h: f64) -> f64 {
    (WALK_WEIGHT_MULTIPLIER * weight_kg
        + floor_div(mean_speed.powi(2), height_cm) * WALK_SPEED_HEIGHT_MULTIPLIER * weight_kg)
        * MIN_IN_H
        * duration_h
}

pub fn swimming_calories(mean_speed: f64, weight_kg: f64) -> f64 {
    (mean_speed + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * weight_kg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_div_truncates_positive_quotient() {
        assert_eq!(floor_div(5.0, 3.0), 1.0);
        assert_eq!(floor_div(6.0, 3.0), 2.0);
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
    }

    #[test]
    fn floor_div_rounds_towards_negative_infinity() {
        assert_eq!(floor_div(-5.0, 3.0), -2.0);
        assert_eq!(floor_div(5.0, -3.0), -2.0);
        assert_eq!(floor_div(-6.0, 3.0), -2.0);
    }

    #[test]
    fn floor_div_keeps_sign_of_zero() {
        assert!(floor_div(1.0, 3.0).is_sign_positive());
        assert!(floor_div(-0.0, 3.0).is_sign_negative());
    }

    #[test]
    fn walking_uses_floor_not_true_division() {
        // 13^2 / 160 = 1.05625 -> 1
        let kcal = walking_calories(13.0, 70.0, 160.0, 1.0);
        assert!((kcal - 268.8).abs() < 1e-9);

        let true_div = (0.035 * 70.0 + (169.0 / 160.0) * 0.029 * 70.0) * 60.0;
        assert!((kcal - true_div).abs() > 1.0);
    }

    #[test]
    fn running_formula() {
        let kcal = running_calories(9.75, 75.0, 1.0);
        assert!((kcal - 699.75).abs() < 1e-9);
    }

    #[test]
    fn swimming_formula() {
        let kcal = swimming_calories(1.0, 80.0);
        assert!((kcal - 336.0).abs() < 1e-9);
    }

    #[test]
    fn pool_speed_ignores_strokes() {
        assert!((pool_speed_kmh(25.0, 40, 1.0) - 1.0).abs() < 1e-12);
        assert!((pool_speed_kmh(50.0, 60, 2.0) - 1.5).abs() < 1e-12);
    }
}
