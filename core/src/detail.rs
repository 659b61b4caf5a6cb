use serde::Serialize;

use crate::model::{ForecastPoint, Reading};

/// Shown for factor lists that are missing or empty.
pub const NO_FACTORS: &str = "None";

/// Shown for scalar fields the point does not carry.
pub const MISSING_VALUE: &str = "n/a";

/// One labelled line of a circle's detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

fn reading(value: Option<&Reading>, unit: &str) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), |value| format!("{value}{unit}"))
}

pub fn factors_text(factors: Option<&[String]>) -> String {
    match factors {
        Some(factors) if !factors.is_empty() => factors.join(", "),
        _ => NO_FACTORS.to_string(),
    }
}

/// Rows in display order.
pub fn detail_rows(point: &ForecastPoint) -> Vec<DetailRow> {
    let row = |label, value| DetailRow { label, value };

    vec![
        row("Behaviour Decision", point.decision.clone()),
        row("Date", point.date.clone()),
        row("Movement Score", reading(point.movement_score.as_ref(), "")),
        row("Temperature", reading(point.temperature.as_ref(), "°C")),
        row("Rain", reading(point.rain.as_ref(), "mm")),
        row("Snow", reading(point.snow.as_ref(), "cm")),
        row("Wind Speed", reading(point.wind_speed.as_ref(), " km/h")),
        row("Wind Direction", reading(point.wind_direction.as_ref(), "")),
        row("Condition", reading(point.condition.as_ref(), "")),
        row(
            "Most Influential Factors",
            factors_text(point.most_influential_factors.as_deref()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> ForecastPoint {
        ForecastPoint {
            date: "2024-06-01".to_string(),
            time_period: "06:00 to 09:00".to_string(),
            decision: "orange".to_string(),
            lat: Some(-43.5),
            lon: Some(171.6),
            radius: None,
            movement_score: Some(Reading::Number(0.4)),
            temperature: Some(Reading::Number(12.0)),
            rain: Some(Reading::Number(2.5)),
            snow: None,
            wind_speed: Some(Reading::Number(20.0)),
            wind_direction: Some(Reading::Text("SW".to_string())),
            condition: Some(Reading::Text("Showers".to_string())),
            most_influential_factors: Some(vec!["rain".to_string(), "wind_speed".to_string()]),
        }
    }

    fn value_of(rows: &[DetailRow], label: &str) -> String {
        rows.iter()
            .find(|row| row.label == label)
            .map(|row| row.value.clone())
            .unwrap_or_default()
    }

    #[test]
    fn rows_carry_units() {
        let rows = detail_rows(&point());
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].label, "Behaviour Decision");
        assert_eq!(value_of(&rows, "Temperature"), "12°C");
        assert_eq!(value_of(&rows, "Rain"), "2.5mm");
        assert_eq!(value_of(&rows, "Snow"), MISSING_VALUE);
        assert_eq!(value_of(&rows, "Wind Speed"), "20 km/h");
        assert_eq!(value_of(&rows, "Most Influential Factors"), "rain, wind_speed");
    }

    #[test]
    fn missing_or_empty_factors_read_none() {
        let mut point = point();
        point.most_influential_factors = None;
        assert_eq!(value_of(&detail_rows(&point), "Most Influential Factors"), "None");

        point.most_influential_factors = Some(Vec::new());
        assert_eq!(value_of(&detail_rows(&point), "Most Influential Factors"), "None");
    }
}
