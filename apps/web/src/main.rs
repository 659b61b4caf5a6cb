mod app;
mod config;
mod dom;
mod fetch;
mod layer;
mod leaflet;
mod logger;
mod popup;

use log::{error, LevelFilter};

fn main() {
    if let Err(err) = logger::init(LevelFilter::Debug) {
        web_sys::console::error_1(&format!("Failed to install logger: {err}").into());
    }

    let app = match app::MapApp::mount() {
        Ok(app) => app,
        Err(err) => {
            error!("Failed to mount the map: {err}");
            return;
        }
    };

    if let Err(err) = app.wire() {
        error!("Failed to wire controls: {err}");
    }

    if let Err(err) = app::on_load(&app) {
        error!("Failed to schedule initial render: {err}");
    }
}
