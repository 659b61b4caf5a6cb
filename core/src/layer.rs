use chrono::NaiveDate;
use log::{debug, error, info};
use serde::Serialize;

use crate::detail::{detail_rows, DetailRow};
use crate::domain::Selection;
use crate::error::Result;
use crate::model::{Dataset, ForecastPoint};

pub const FILL_OPACITY: f64 = 0.3;

/// A forecast point resolved into something a map can draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    pub lat: f64,
    pub lon: f64,
    /// Meters.
    pub radius: f64,
    /// Stroke and fill color, taken verbatim from the point's decision.
    pub color: String,
    pub fill_opacity: f64,
    pub details: Vec<DetailRow>,
}

impl Circle {
    pub fn from_point(point: &ForecastPoint) -> Option<Self> {
        let (lat, lon) = point.position()?;
        Some(Self {
            lat,
            lon,
            radius: point.radius_or_default(),
            color: point.decision.clone(),
            fill_opacity: FILL_OPACITY,
            details: detail_rows(point),
        })
    }
}

/// Every point across every location on `date` in `time_period`, in dataset
/// order. Points without coordinates never match.
pub fn select_points<'a>(
    dataset: &'a Dataset,
    date: &'a str,
    time_period: &'a str,
) -> impl Iterator<Item = &'a ForecastPoint> + 'a {
    dataset
        .iter()
        .flat_map(|location| location.forecast.iter())
        .filter(move |point| point.position().is_some() && point.matches(date, time_period))
}

pub fn circles_for(dataset: &Dataset, selection: Selection, today: NaiveDate) -> Vec<Circle> {
    let date = selection.target_date(today);
    select_points(dataset, &date, selection.period.as_str())
        .filter_map(Circle::from_point)
        .collect()
}

/// The drawable group of behaviour circles a map view owns.
pub trait CircleLayer {
    fn clear(&mut self);

    fn add_circle(&mut self, circle: Circle);

    fn circle_count(&self) -> usize;
}

impl CircleLayer for Vec<Circle> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn add_circle(&mut self, circle: Circle) {
        self.push(circle);
    }

    fn circle_count(&self) -> usize {
        self.len()
    }
}

/// Replaces the layer's contents with the circles for `selection`.
///
/// The layer is always cleared first. A failed load is logged and leaves it
/// empty. Returns the number of circles drawn.
pub fn redraw<L: CircleLayer + ?Sized>(
    layer: &mut L,
    loaded: Result<Dataset>,
    selection: Selection,
    today: NaiveDate,
) -> usize {
    layer.clear();

    let dataset = match loaded {
        Ok(dataset) => dataset,
        Err(err) => {
            error!("Invalid behaviour payload data: {err}");
            return 0;
        }
    };

    debug!(
        "Behaviour target date: {} time period: {}",
        selection.target_date(today),
        selection.period
    );

    for circle in circles_for(&dataset, selection, today) {
        debug!(
            "Rendering behaviour circle at: {} {} color: {}",
            circle.lat, circle.lon, circle.color
        );
        layer.add_circle(circle);
    }

    let count = layer.circle_count();
    info!("Added {count} behaviour circles to the map.");
    count
}

/// What activating the layer toggle should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// Detach the layer, keeping its circles, and clear the `selected` state.
    Hide,
    /// Reload and redraw, then attach the layer and set the `selected` state.
    RedrawAndShow,
}

impl ToggleAction {
    pub const fn for_visibility(attached: bool) -> Self {
        if attached {
            Self::Hide
        } else {
            Self::RedrawAndShow
        }
    }

    /// Whether the layer is attached once the action completes.
    pub const fn attached_after(self) -> bool {
        matches!(self, Self::RedrawAndShow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::parse_dataset;
    use crate::error::ForecastError;
    use crate::model::{LocationEntry, DEFAULT_RADIUS};

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default()
    }

    fn point(date: &str, period: &str, decision: &str, lat: f64, lon: f64) -> ForecastPoint {
        ForecastPoint {
            date: date.to_string(),
            time_period: period.to_string(),
            decision: decision.to_string(),
            lat: Some(lat),
            lon: Some(lon),
            radius: None,
            movement_score: None,
            temperature: None,
            rain: None,
            snow: None,
            wind_speed: None,
            wind_direction: None,
            condition: None,
            most_influential_factors: None,
        }
    }

    fn mixed_dataset() -> Dataset {
        vec![
            LocationEntry {
                forecast: vec![
                    point("2024-06-01", "06:00 to 09:00", "green", -43.1, 171.1),
                    point("2024-06-01", "09:00 to 11:00", "green", -43.1, 171.1),
                    point("2024-06-02", "06:00 to 09:00", "red", -43.1, 171.1),
                ],
            },
            LocationEntry { forecast: Vec::new() },
            LocationEntry {
                forecast: vec![
                    point("2024-06-01", "06:00 to 09:00", "orange", -44.0, 170.2),
                    ForecastPoint {
                        lon: None,
                        ..point("2024-06-01", "06:00 to 09:00", "orange", -44.0, 170.2)
                    },
                ],
            },
        ]
    }

    #[test]
    fn selects_exactly_the_matching_points() {
        let dataset = mixed_dataset();
        let matched: Vec<_> = select_points(&dataset, "2024-06-01", "06:00 to 09:00").collect();
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].decision, "green");
        assert_eq!(matched[1].decision, "orange");

        assert_eq!(select_points(&dataset, "2024-06-02", "06:00 to 09:00").count(), 1);
        assert_eq!(select_points(&dataset, "2024-06-03", "06:00 to 09:00").count(), 0);
    }

    #[test]
    fn single_point_today_draws_one_default_circle(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let body = r#"[{"forecast": [{"date": "2024-06-01", "time_period": "06:00 to 09:00",
            "lat": -43.5, "lon": 171.6, "decision": "red"}]}]"#;
        let mut layer: Vec<Circle> = Vec::new();

        let drawn = redraw(&mut layer, parse_dataset(body), Selection::from_slider(2), june_first());

        assert_eq!(drawn, 1);
        let circle = &layer[0];
        assert!((circle.lat - -43.5).abs() < f64::EPSILON);
        assert!((circle.lon - 171.6).abs() < f64::EPSILON);
        assert_eq!(circle.color, "red");
        assert!((circle.radius - DEFAULT_RADIUS).abs() < f64::EPSILON);
        assert!((circle.radius - 5000.0).abs() < f64::EPSILON);

        let tomorrow = redraw(&mut layer, parse_dataset(body), Selection::from_slider(10), june_first());
        assert_eq!(tomorrow, 0);
        assert!(layer.is_empty());
        Ok(())
    }

    #[test]
    fn redraw_replaces_instead_of_appending() {
        let mut layer: Vec<Circle> = Vec::new();
        let selection = Selection::DEFAULT;

        let first = redraw(&mut layer, Ok(mixed_dataset()), selection, june_first());
        let snapshot = layer.clone();
        let second = redraw(&mut layer, Ok(mixed_dataset()), selection, june_first());

        assert_eq!(first, 2);
        assert_eq!(second, 2);
        assert_eq!(layer, snapshot);
    }

    #[test]
    fn failed_load_leaves_layer_empty() {
        let mut layer: Vec<Circle> = Vec::new();
        redraw(&mut layer, Ok(mixed_dataset()), Selection::DEFAULT, june_first());
        assert_eq!(layer.len(), 2);

        let drawn = redraw(
            &mut layer,
            parse_dataset(r#"{"not": "an array"}"#),
            Selection::DEFAULT,
            june_first(),
        );
        assert_eq!(drawn, 0);
        assert!(layer.is_empty());

        let drawn = redraw(
            &mut layer,
            Err(ForecastError::Status(404)),
            Selection::DEFAULT,
            june_first(),
        );
        assert_eq!(drawn, 0);
    }

    #[test]
    fn circles_carry_detail_rows() {
        let circles = circles_for(&mixed_dataset(), Selection::DEFAULT, june_first());
        let factors = circles[0]
            .details
            .iter()
            .find(|row| row.label == "Most Influential Factors")
            .map(|row| row.value.as_str());
        assert_eq!(factors, Some("None"));
        assert!((circles[0].fill_opacity - FILL_OPACITY).abs() < f64::EPSILON);
    }

    #[test]
    fn toggle_alternates_between_hide_and_show() {
        let first = ToggleAction::for_visibility(true);
        assert_eq!(first, ToggleAction::Hide);
        assert!(!first.attached_after());

        let second = ToggleAction::for_visibility(first.attached_after());
        assert_eq!(second, ToggleAction::RedrawAndShow);
        assert!(second.attached_after());
    }
}
