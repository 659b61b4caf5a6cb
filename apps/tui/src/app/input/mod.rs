use crate::app::state::App;
use crossterm::event::KeyCode;
use movement_core::domain::MAX_SLIDER_POSITION;
use movement_core::modal::ModalTrigger;

pub async fn handle_input(app: &mut App, key: KeyCode) {
    if handle_modal_input(app, key) {
        return;
    }

    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Right => app.step_forward().await,
        KeyCode::Left => app.step_back().await,
        KeyCode::Home => app.set_slider_position(0).await,
        KeyCode::End => app.set_slider_position(MAX_SLIDER_POSITION).await,
        KeyCode::Char('b') => app.toggle_layer().await,
        KeyCode::Char('r') => {
            app.display().await;
        }
        KeyCode::Down | KeyCode::Tab => app.select_next_circle(),
        KeyCode::Up | KeyCode::BackTab => app.select_previous_circle(),
        KeyCode::Char('+' | '=') => app.viewport.zoom_in(),
        KeyCode::Char('-') => app.viewport.zoom_out(),
        KeyCode::Char('i') | KeyCode::F(1) => app.apply_modal(ModalTrigger::InfoControl),
        _ => {}
    }
}

/// While the info dialog is open it swallows every key; Esc, Enter and `x`
/// close it.
fn handle_modal_input(app: &mut App, key: KeyCode) -> bool {
    if !app.modal.is_visible() {
        return false;
    }

    match key {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('x') => {
            app.apply_modal(ModalTrigger::CloseControl);
        }
        _ => app.apply_modal(ModalTrigger::ContentClick),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::path::PathBuf;

    fn app() -> App {
        let config = AppConfig {
            data_path: PathBuf::from("/nonexistent/movement.json"),
            ..AppConfig::default()
        };
        App::new(&config)
    }

    #[tokio::test]
    async fn open_dialog_swallows_keys() {
        let mut app = app();
        app.apply_modal(ModalTrigger::PageLoad);

        handle_input(&mut app, KeyCode::Char('q')).await;
        assert!(app.running);
        assert!(app.modal.is_visible());

        handle_input(&mut app, KeyCode::Esc).await;
        assert!(!app.modal.is_visible());

        handle_input(&mut app, KeyCode::Char('i')).await;
        assert!(app.modal.is_visible());
    }

    #[tokio::test]
    async fn arrows_move_the_slider() {
        let mut app = app();

        handle_input(&mut app, KeyCode::Right).await;
        assert_eq!(app.selection.current().slider_position(), 3);

        handle_input(&mut app, KeyCode::End).await;
        assert_eq!(app.selection.current().slider_position(), MAX_SLIDER_POSITION);

        handle_input(&mut app, KeyCode::Home).await;
        handle_input(&mut app, KeyCode::Left).await;
        assert_eq!(app.selection.current().slider_position(), 0);
    }

    #[tokio::test]
    async fn zoom_and_quit() {
        let mut app = app();
        let zoom = app.viewport.zoom;

        handle_input(&mut app, KeyCode::Char('+')).await;
        assert_eq!(app.viewport.zoom, zoom + 1);
        handle_input(&mut app, KeyCode::Char('-')).await;
        assert_eq!(app.viewport.zoom, zoom);

        handle_input(&mut app, KeyCode::Char('q')).await;
        assert!(!app.running);
    }
}
