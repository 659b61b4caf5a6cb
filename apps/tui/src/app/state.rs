use crate::config::AppConfig;
use crate::source::load_dataset;
use chrono::NaiveDate;
use movement_core::modal::{ModalState, ModalTrigger};
use movement_core::notes::{NoteRotator, NOTE_INTERVAL};
use movement_core::view::MapViewport;
use movement_core::{redraw, Circle, Selection, SelectionState, ToggleAction};
use std::path::PathBuf;
use std::time::Instant;

pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub data_path: PathBuf,
    /// Source of "today"; swapped out in tests.
    pub today: fn() -> NaiveDate,
    pub selection: SelectionState,
    /// The circle layer. Kept while hidden so showing it again is immediate.
    pub layer: Vec<Circle>,
    pub layer_visible: bool,
    pub modal: ModalState,
    pub notes: NoteRotator,
    pub current_note: Option<&'static str>,
    pub last_note_at: Instant,
    pub viewport: MapViewport,
    pub selected_circle: usize,
    pub status_message: String,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            running: true,
            data_path: config.data_path.clone(),
            today: local_today,
            selection: SelectionState::new(),
            layer: Vec::new(),
            layer_visible: true,
            modal: ModalState::Hidden,
            notes: NoteRotator::behaviour(),
            current_note: None,
            last_note_at: Instant::now(),
            viewport: MapViewport::default(),
            selected_circle: 0,
            status_message: String::new(),
        }
    }

    /// Start-up: show the info dialog and draw the default selection.
    pub async fn initialize(&mut self) {
        self.modal = self.modal.apply(ModalTrigger::PageLoad);
        self.selection.set_slider_position(Selection::DEFAULT.slider_position());
        self.display().await;
    }

    /// Reloads the dataset and replaces the layer with the current selection.
    pub async fn display(&mut self) -> usize {
        let selection = self.selection.current();
        let loaded = load_dataset(&self.data_path).await;

        if let Err(e) = &loaded {
            self.status_message = format!("Failed to load {}: {e}", self.data_path.display());
        }
        let failed = loaded.is_err();

        let count = redraw(&mut self.layer, loaded, selection, (self.today)());
        self.selected_circle = 0;

        if !failed {
            self.status_message = format!("{count} behaviour circles for {}", self.label());
        }
        count
    }

    pub fn label(&self) -> String {
        self.selection.current().label((self.today)())
    }

    pub async fn set_slider_position(&mut self, position: u8) {
        self.selection.set_slider_position(position);
        self.display().await;
    }

    pub async fn step_forward(&mut self) {
        let before = self.selection.current();
        if self.selection.step_forward() != before {
            self.display().await;
        }
    }

    pub async fn step_back(&mut self) {
        let before = self.selection.current();
        if self.selection.step_back() != before {
            self.display().await;
        }
    }

    pub async fn toggle_layer(&mut self) {
        let action = ToggleAction::for_visibility(self.layer_visible);
        if action == ToggleAction::RedrawAndShow {
            self.display().await;
        }
        self.layer_visible = action.attached_after();
    }

    pub fn apply_modal(&mut self, trigger: ModalTrigger) {
        self.modal = self.modal.apply(trigger);
    }

    /// Circles currently on the map; empty while the layer is hidden.
    pub fn visible_circles(&self) -> &[Circle] {
        if self.layer_visible {
            &self.layer
        } else {
            &[]
        }
    }

    pub fn selected(&self) -> Option<&Circle> {
        self.visible_circles().get(self.selected_circle)
    }

    pub fn select_next_circle(&mut self) {
        let count = self.visible_circles().len();
        if count > 0 {
            self.selected_circle = (self.selected_circle + 1) % count;
        }
    }

    pub fn select_previous_circle(&mut self) {
        let count = self.visible_circles().len();
        if count > 0 {
            self.selected_circle = self.selected_circle.checked_sub(1).unwrap_or(count - 1);
        }
    }

    /// Advances the note panel once per `NOTE_INTERVAL`.
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    pub fn update_at(&mut self, now: Instant) {
        if now.duration_since(self.last_note_at) >= NOTE_INTERVAL {
            self.current_note = self.notes.tick();
            self.last_note_at = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ONE_POINT: &str = r#"[{"forecast": [{"date": "2024-06-01", "time_period": "06:00 to 09:00",
        "lat": -43.5, "lon": 171.6, "decision": "red"}]}]"#;

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default()
    }

    fn app_with(body: &str) -> Result<(App, NamedTempFile), std::io::Error> {
        let mut file = NamedTempFile::new()?;
        file.write_all(body.as_bytes())?;

        let config = AppConfig {
            data_path: file.path().to_path_buf(),
            ..AppConfig::default()
        };
        let mut app = App::new(&config);
        app.today = june_first;
        Ok((app, file))
    }

    #[tokio::test]
    async fn initialize_shows_info_and_default_selection() -> Result<(), std::io::Error> {
        let (mut app, _file) = app_with(ONE_POINT)?;
        app.initialize().await;

        assert!(app.modal.is_visible());
        assert_eq!(app.selection.current(), Selection::DEFAULT);
        assert_eq!(app.layer.len(), 1);
        assert_eq!(app.layer[0].color, "red");
        assert!((app.layer[0].radius - 5000.0).abs() < f64::EPSILON);
        Ok(())
    }

    #[tokio::test]
    async fn moving_to_tomorrow_clears_the_layer() -> Result<(), std::io::Error> {
        let (mut app, _file) = app_with(ONE_POINT)?;
        app.initialize().await;

        app.set_slider_position(10).await;
        assert_eq!(app.selection.current().day_offset, 1);
        assert!(app.layer.is_empty());

        app.set_slider_position(2).await;
        assert_eq!(app.layer.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn toggle_hides_then_redraws() -> Result<(), std::io::Error> {
        let (mut app, file) = app_with(ONE_POINT)?;
        app.initialize().await;
        assert!(app.layer_visible);

        app.toggle_layer().await;
        assert!(!app.layer_visible);
        assert_eq!(app.layer.len(), 1, "hiding keeps the circles");
        assert!(app.visible_circles().is_empty());

        std::fs::write(file.path(), "[]")?;
        app.toggle_layer().await;
        assert!(app.layer_visible);
        assert!(app.layer.is_empty(), "showing reloads the dataset");
        Ok(())
    }

    #[tokio::test]
    async fn broken_dataset_renders_nothing() -> Result<(), std::io::Error> {
        let (mut app, _file) = app_with(r#"{"forecast": []}"#)?;
        app.initialize().await;

        assert!(app.layer.is_empty());
        assert!(app.status_message.starts_with("Failed to load"));
        Ok(())
    }

    #[tokio::test]
    async fn circle_selection_wraps() -> Result<(), std::io::Error> {
        let body = r#"[{"forecast": [
            {"date": "2024-06-01", "time_period": "06:00 to 09:00", "lat": -43.5, "lon": 171.6, "decision": "red"},
            {"date": "2024-06-01", "time_period": "06:00 to 09:00", "lat": -43.9, "lon": 170.1, "decision": "green"}
        ]}]"#;
        let (mut app, _file) = app_with(body)?;
        app.initialize().await;

        app.select_previous_circle();
        assert_eq!(app.selected().map(|circle| circle.color.as_str()), Some("green"));
        app.select_next_circle();
        assert_eq!(app.selected().map(|circle| circle.color.as_str()), Some("red"));
        Ok(())
    }

    #[test]
    fn notes_rotate_every_interval() {
        let mut app = App::new(&AppConfig::default());
        let start = app.last_note_at;

        app.update_at(start + NOTE_INTERVAL / 2);
        assert_eq!(app.current_note, None);

        app.update_at(start + NOTE_INTERVAL);
        assert_eq!(app.current_note, Some(movement_core::notes::BEHAVIOUR_NOTES[0]));

        app.update_at(start + NOTE_INTERVAL * 2);
        assert_eq!(app.current_note, Some(movement_core::notes::BEHAVIOUR_NOTES[1]));
    }
}
