use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::NaiveDate;
use log::{debug, warn};
use movement_core::modal::{ModalState, ModalTrigger};
use movement_core::notes::{NoteRotator, NOTE_INTERVAL};
use movement_core::view::{DEFAULT_CENTER, DEFAULT_ZOOM, TILE_ATTRIBUTION, TILE_URL_TEMPLATE};
use movement_core::{redraw, Selection, SelectionState, ToggleAction};
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement};

use crate::config::{
    CLOSE_SELECTOR, DATA_URL, DAY_TIME_TEXT_ID, INFO_BUTTON_ID, MAP_CONTAINER_ID, MODAL_ID,
    NOTE_TEXT_ID, SELECTED_CLASS, SLIDER_ID, TOGGLE_BUTTON_ID,
};
use crate::dom::{self, DomError};
use crate::fetch::load_dataset;
use crate::layer::LeafletLayer;
use crate::leaflet::{self, Map};

#[derive(Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
}

/// Today's date in the browser's local time zone.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    let year = i32::try_from(now.get_full_year()).unwrap_or(1970);
    NaiveDate::from_ymd_opt(year, now.get_month() + 1, now.get_date()).unwrap_or_default()
}

/// Page state. Lives for the whole page behind an `Rc`; every handler runs on
/// the UI thread and no `RefCell` borrow is held across an `.await`.
pub struct MapApp {
    map: Map,
    layer: LeafletLayer,
    selection: RefCell<SelectionState>,
    notes: RefCell<NoteRotator>,
    modal: Cell<ModalState>,
    modal_element: HtmlElement,
    note_text: Element,
    day_time_text: Element,
    slider: HtmlInputElement,
    toggle_button: Element,
}

impl MapApp {
    pub fn mount() -> Result<Rc<Self>, DomError> {
        let map = leaflet::map(MAP_CONTAINER_ID);
        map.set_view(
            &leaflet::lat_lng(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            f64::from(DEFAULT_ZOOM),
        );

        let tile_options = serde_wasm_bindgen::to_value(&TileOptions {
            attribution: TILE_ATTRIBUTION,
        })
        .map_err(|error| DomError::Js(error.to_string()))?;
        leaflet::tile_layer(TILE_URL_TEMPLATE, &tile_options).add_to(&map);

        let layer = LeafletLayer::new(&map);

        Ok(Rc::new(Self {
            map,
            layer,
            selection: RefCell::new(SelectionState::new()),
            notes: RefCell::new(NoteRotator::behaviour()),
            modal: Cell::new(ModalState::Hidden),
            modal_element: dom::by_id(MODAL_ID)?,
            note_text: dom::by_id(NOTE_TEXT_ID)?,
            day_time_text: dom::by_id(DAY_TIME_TEXT_ID)?,
            slider: dom::by_id(SLIDER_ID)?,
            toggle_button: dom::by_id(TOGGLE_BUTTON_ID)?,
        }))
    }

    /// Subscribes every control. Handlers are kept alive for the page's lifetime.
    pub fn wire(self: &Rc<Self>) -> Result<(), DomError> {
        let info_button: HtmlElement = dom::by_id(INFO_BUTTON_ID)?;
        dom::listen(&info_button, "click", {
            let app = Rc::clone(self);
            move |_| app.apply_modal(ModalTrigger::InfoControl)
        })?;

        let close = dom::query(CLOSE_SELECTOR)?;
        dom::listen(&close, "click", {
            let app = Rc::clone(self);
            move |_| app.apply_modal(ModalTrigger::CloseControl)
        })?;

        dom::listen(&*dom::window()?, "click", {
            let app = Rc::clone(self);
            move |event| app.on_window_click(&event)
        })?;

        dom::listen(&self.slider, "input", {
            let app = Rc::clone(self);
            move |_| spawn_local(Rc::clone(&app).on_slider_input())
        })?;

        dom::listen(&self.toggle_button, "click", {
            let app = Rc::clone(self);
            move |_| spawn_local(Rc::clone(&app).on_toggle())
        })?;

        let interval = i32::try_from(NOTE_INTERVAL.as_millis()).unwrap_or(5000);
        dom::every(interval, {
            let app = Rc::clone(self);
            move || app.show_next_note()
        })?;

        Ok(())
    }

    /// Page load: show the info dialog and draw the default selection.
    pub async fn initialize(self: Rc<Self>) {
        self.apply_modal(ModalTrigger::PageLoad);

        let selection = self
            .selection
            .borrow_mut()
            .set_slider_position(Selection::DEFAULT.slider_position());
        self.slider.set_value(&selection.slider_position().to_string());
        self.update_label(selection);
        if self.layer.is_attached(&self.map) {
            self.set_toggle_selected(true);
        }

        self.display(selection).await;
    }

    /// Loads the dataset and replaces the layer's circles with `selection`'s.
    async fn display(&self, selection: Selection) -> usize {
        let loaded = load_dataset(DATA_URL).await;
        let mut layer = self.layer.clone();
        redraw(&mut layer, loaded, selection, today())
    }

    async fn on_slider_input(self: Rc<Self>) {
        let Ok(position) = self.slider.value().parse::<u8>() else {
            warn!("Ignoring slider value {:?}", self.slider.value());
            return;
        };

        let selection = self.selection.borrow_mut().set_slider_position(position);
        self.update_label(selection);
        self.display(selection).await;
    }

    async fn on_toggle(self: Rc<Self>) {
        match ToggleAction::for_visibility(self.layer.is_attached(&self.map)) {
            ToggleAction::Hide => {
                self.layer.detach(&self.map);
                self.set_toggle_selected(false);
            }
            ToggleAction::RedrawAndShow => {
                let selection = self.selection.borrow().current();
                self.display(selection).await;
                self.layer.attach(&self.map);
                self.set_toggle_selected(true);
            }
        }
    }

    fn on_window_click(&self, event: &Event) {
        let on_backdrop = event
            .target()
            .is_some_and(|target| js_sys::Object::is(&target, &self.modal_element));

        if on_backdrop {
            self.apply_modal(ModalTrigger::BackdropClick);
        }
    }

    fn apply_modal(&self, trigger: ModalTrigger) {
        let next = self.modal.get().apply(trigger);
        self.modal.set(next);
        if let Err(error) = self
            .modal_element
            .style()
            .set_property("display", next.css_display())
        {
            warn!("Failed to update modal display: {error:?}");
        }
    }

    fn show_next_note(&self) {
        if let Some(note) = self.notes.borrow_mut().tick() {
            self.note_text.set_text_content(Some(note));
        }
    }

    fn update_label(&self, selection: Selection) {
        let label = selection.label(today());
        debug!("Selected {label}");
        self.day_time_text.set_text_content(Some(&label));
    }

    fn set_toggle_selected(&self, selected: bool) {
        let classes = self.toggle_button.class_list();
        let result = if selected {
            classes.add_1(SELECTED_CLASS)
        } else {
            classes.remove_1(SELECTED_CLASS)
        };
        if let Err(error) = result {
            warn!("Failed to update toggle state: {error:?}");
        }
    }
}

impl std::fmt::Debug for MapApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapApp")
            .field("selection", &self.selection.borrow().current())
            .field("modal", &self.modal.get())
            .finish_non_exhaustive()
    }
}

/// Whether the page has already fired `load`.
pub fn page_loaded() -> bool {
    dom::document().is_ok_and(|document| document.ready_state() == "complete")
}

pub fn on_load(app: &Rc<MapApp>) -> Result<(), DomError> {
    if page_loaded() {
        spawn_local(Rc::clone(app).initialize());
        return Ok(());
    }

    let app = Rc::clone(app);
    dom::listen(&*dom::window()?, "load", move |_| {
        spawn_local(Rc::clone(&app).initialize());
    })
}
