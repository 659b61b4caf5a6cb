/// Initial map center, Canterbury high country.
pub const DEFAULT_CENTER: (f64, f64) = (-43.446754, 171.592242);

pub const DEFAULT_ZOOM: u8 = 7;

pub const MIN_ZOOM: u8 = 2;

pub const MAX_ZOOM: u8 = 12;

pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// Meters per degree of latitude.
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Tiles a view spans horizontally.
const VIEW_TILES: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
}

impl MapViewport {
    pub const fn new(center_lat: f64, center_lon: f64, zoom: u8) -> Self {
        Self {
            center_lat,
            center_lon,
            zoom,
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
    }

    /// Degrees of longitude visible at the current zoom.
    pub fn lon_span(&self) -> f64 {
        360.0 / 2_f64.powi(i32::from(self.zoom)) * VIEW_TILES
    }

    /// `[min, max]` longitude bounds.
    pub fn x_bounds(&self) -> [f64; 2] {
        let half = self.lon_span() / 2.0;
        [self.center_lon - half, self.center_lon + half]
    }

    /// `[min, max]` latitude bounds; half the longitude span, clamped to the poles.
    pub fn y_bounds(&self) -> [f64; 2] {
        let half = self.lon_span() / 4.0;
        [
            (self.center_lat - half).max(-90.0),
            (self.center_lat + half).min(90.0),
        ]
    }
}

impl Default for MapViewport {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1, DEFAULT_ZOOM)
    }
}

/// Converts a radius in meters into degrees of latitude.
pub fn meters_to_degrees(meters: f64) -> f64 {
    meters / METERS_PER_DEGREE
}
