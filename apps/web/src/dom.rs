use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, Window};

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no window")]
    NoWindow,

    #[error("no document")]
    NoDocument,

    #[error("missing element: {0}")]
    Missing(String),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn by_id<T: JsCast>(id: &str) -> Result<T, DomError> {
    document()?
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
        .ok_or_else(|| DomError::Missing(format!("#{id}")))
}

pub fn query(selector: &str) -> Result<Element, DomError> {
    document()?
        .query_selector(selector)?
        .ok_or_else(|| DomError::Missing(selector.to_string()))
}

/// Subscribes `handler` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Runs `tick` every `millis` milliseconds for the lifetime of the page.
pub fn every<F>(millis: i32, tick: F) -> Result<(), DomError>
where
    F: FnMut() + 'static,
{
    let closure = Closure::<dyn FnMut()>::new(tick);
    window()?.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        millis,
    )?;
    closure.forget();
    Ok(())
}
