use movement_core::{Circle, CircleLayer};
use serde::Serialize;

use crate::leaflet::{self, LayerGroup, Map};
use crate::popup::popup_html;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CircleOptions<'a> {
    color: &'a str,
    fill_color: &'a str,
    fill_opacity: f64,
    radius: f64,
}

/// Handle to the Leaflet group holding the behaviour circles.
#[derive(Debug, Clone)]
pub struct LeafletLayer {
    group: LayerGroup,
}

impl LeafletLayer {
    pub fn new(map: &Map) -> Self {
        let group = leaflet::layer_group();
        group.add_to(map);
        Self { group }
    }

    pub fn is_attached(&self, map: &Map) -> bool {
        map.has_layer(&self.group)
    }

    /// Removes the group from the map; its circles stay in it.
    pub fn detach(&self, map: &Map) {
        map.remove_layer(&self.group);
    }

    pub fn attach(&self, map: &Map) {
        map.add_layer(&self.group);
    }
}

impl CircleLayer for LeafletLayer {
    fn clear(&mut self) {
        self.group.clear_layers();
    }

    fn add_circle(&mut self, circle: Circle) {
        let options = CircleOptions {
            color: &circle.color,
            fill_color: &circle.color,
            fill_opacity: circle.fill_opacity,
            radius: circle.radius,
        };
        let options = match serde_wasm_bindgen::to_value(&options) {
            Ok(options) => options,
            Err(error) => {
                log::error!("Failed to build circle options: {error}");
                return;
            }
        };

        let shape = leaflet::circle(&leaflet::lat_lng(circle.lat, circle.lon), &options);
        shape.bind_popup(&popup_html(&circle.details));
        self.group.add_layer(&shape);
    }

    fn circle_count(&self) -> usize {
        self.group.get_layers().length() as usize
    }
}
