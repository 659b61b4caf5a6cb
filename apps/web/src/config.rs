//! Fixed page configuration: dataset location and the element ids the page exposes.

pub const DATA_URL: &str = "data/movement.json";

pub const NOTE_TEXT_ID: &str = "static_text_box";
pub const MODAL_ID: &str = "popupModal";
pub const INFO_BUTTON_ID: &str = "infoButton";
pub const CLOSE_SELECTOR: &str = ".close";
pub const MAP_CONTAINER_ID: &str = "map";
pub const SLIDER_ID: &str = "timeSlider";
pub const DAY_TIME_TEXT_ID: &str = "day-time-text";
pub const TOGGLE_BUTTON_ID: &str = "toggleBehaviourCircles";

/// Class set on the toggle while the circle layer is on the map.
pub const SELECTED_CLASS: &str = "selected";
