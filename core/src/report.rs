use crate::types::{InfoMessage, Language};

/// Rendrer meldingen med fast mal og tre desimaler på alle tall.
pub fn render(info: &InfoMessage) -> String {
    render_localized(info, Language::En)
}

pub fn render_localized(info: &InfoMessage, language: Language) -> String {
    match language {
        Language::En => format!(
            "Activity type: {}; \
             Duration: {:.3} h.; \
             Distance: {:.3} km; \
             Avg. speed: {:.3} km/h; \
             Calories burned: {:.3}.",
            info.training_type, info.duration, info.distance, info.speed, info.calories
        ),
        Language::Ru => format!(
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            info.training_type, info.duration, info.distance, info.speed, info.calories
        ),
    }
}
