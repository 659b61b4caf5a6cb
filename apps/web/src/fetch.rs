use movement_core::error::{ForecastError, Result};
use movement_core::{parse_dataset, Dataset};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn fetch_error(context: &str, error: &JsValue) -> ForecastError {
    ForecastError::Fetch(format!("{context}: {error:?}"))
}

/// Fetches and parses the dataset. Never cached; every call hits the network.
pub async fn load_dataset(url: &str) -> Result<Dataset> {
    let window = web_sys::window().ok_or_else(|| ForecastError::Fetch("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|error| fetch_error("Failed to build request", &error))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|error| fetch_error("Request failed", &error))?;

    let response: Response = response_value
        .dyn_into()
        .map_err(|error| fetch_error("Failed to read response", &error))?;

    if !response.ok() {
        return Err(ForecastError::Status(response.status()));
    }

    let text_promise = response
        .text()
        .map_err(|error| fetch_error("Failed to read body", &error))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|error| fetch_error("Failed to read body", &error))?
        .as_string()
        .ok_or_else(|| ForecastError::Fetch("body is not text".to_string()))?;

    let dataset = parse_dataset(&body)?;
    log::info!("Behaviour data fetched successfully: {} locations", dataset.len());
    Ok(dataset)
}
