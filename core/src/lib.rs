//! Forecast model and selection logic for the Movement Map front ends.
//!
//! Loading is left to the front ends; everything here is synchronous and
//! free of any map or DOM runtime.

pub mod dataset;
pub mod detail;
pub mod domain;
pub mod error;
pub mod layer;
pub mod modal;
pub mod model;
pub mod notes;
pub mod view;

pub use dataset::{dataset_from_value, parse_dataset};
pub use domain::{Selection, SelectionState, TimePeriod};
pub use error::ForecastError;
pub use layer::{circles_for, redraw, select_points, Circle, CircleLayer, ToggleAction};
pub use model::{Dataset, ForecastPoint, LocationEntry};
