use log::{debug, warn};
use serde_json::Value;

use crate::error::{ForecastError, Result};
use crate::model::{Dataset, ForecastPoint, LocationEntry};

/// Parses the body of `movement.json`.
pub fn parse_dataset(body: &str) -> Result<Dataset> {
    let payload: Value = serde_json::from_str(body)?;
    dataset_from_value(payload)
}

/// Validates an already decoded payload.
///
/// The root must be an array. Locations without a `forecast` array and forecast
/// entries that do not decode are skipped with a warning, the rest is kept.
pub fn dataset_from_value(payload: Value) -> Result<Dataset> {
    let Value::Array(locations) = payload else {
        return Err(ForecastError::Shape(format!(
            "expected an array of locations, found {}",
            kind_of(&payload)
        )));
    };

    let mut dataset = Vec::with_capacity(locations.len());
    for (index, location) in locations.into_iter().enumerate() {
        let forecast = match location {
            Value::Object(mut fields) => fields.remove("forecast"),
            _ => None,
        };
        let Some(Value::Array(entries)) = forecast else {
            warn!("No forecast array in location {index}");
            continue;
        };

        let forecast = entries
            .into_iter()
            .enumerate()
            .filter_map(|(entry_index, entry)| {
                match serde_json::from_value::<ForecastPoint>(entry) {
                    Ok(point) => Some(point),
                    Err(error) => {
                        warn!("Skipping forecast {entry_index} of location {index}: {error}");
                        None
                    }
                }
            })
            .collect();

        dataset.push(LocationEntry { forecast });
    }

    debug!("Behaviour data parsed: {} locations", dataset.len());
    Ok(dataset)
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
