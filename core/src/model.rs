use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Radius in meters for points that do not carry one.
pub const DEFAULT_RADIUS: f64 = 5000.0;

/// A weather or score value; the dataset writes some as numbers, some as text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Reading {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// One forecast. `date`, `time_period` and the coordinates must have the right
/// type for the point to be kept; every other field is read leniently.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ForecastPoint {
    pub date: String,
    pub time_period: String,
    /// Behaviour classification, also the color the circle is drawn with.
    #[serde(default, deserialize_with = "lenient_text")]
    pub decision: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub radius: Option<f64>,
    #[serde(default, deserialize_with = "lenient_reading")]
    pub movement_score: Option<Reading>,
    #[serde(default, deserialize_with = "lenient_reading")]
    pub temperature: Option<Reading>,
    #[serde(default, deserialize_with = "lenient_reading")]
    pub rain: Option<Reading>,
    #[serde(default, deserialize_with = "lenient_reading")]
    pub snow: Option<Reading>,
    #[serde(default, deserialize_with = "lenient_reading")]
    pub wind_speed: Option<Reading>,
    #[serde(default, deserialize_with = "lenient_reading")]
    pub wind_direction: Option<Reading>,
    #[serde(default, deserialize_with = "lenient_reading")]
    pub condition: Option<Reading>,
    /// Anything other than an array reads as absent.
    #[serde(default, deserialize_with = "lenient_factors")]
    pub most_influential_factors: Option<Vec<String>>,
}

fn text_of(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        other => text_of(other),
    })
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_f64())
}

fn lenient_reading<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Reading>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Number(number) => number.as_f64().map(Reading::Number),
        other => Some(Reading::Text(text_of(other))),
    })
}

fn lenient_factors<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(items.into_iter().map(text_of).collect()),
        _ => None,
    })
}

impl ForecastPoint {
    pub fn radius_or_default(&self) -> f64 {
        self.radius.filter(|radius| *radius > 0.0).unwrap_or(DEFAULT_RADIUS)
    }

    /// Both coordinates, when the point has them.
    pub const fn position(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    pub fn matches(&self, date: &str, time_period: &str) -> bool {
        self.date == date && self.time_period == time_period
    }
}

/// One location's forecasts. The location's own coordinates are not used;
/// every point carries its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocationEntry {
    pub forecast: Vec<ForecastPoint>,
}

pub type Dataset = Vec<LocationEntry>;
