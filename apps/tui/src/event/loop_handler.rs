use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use chrono::NaiveDate;
use movement_core::error::Result as LoadResult;
use movement_core::{redraw, Circle, Dataset, Selection};
use std::fmt::Write as _;

use crate::app::{handle_input, App};
use crate::source::load_dataset;
use crate::terminal::Tui;
use crate::ui;

/// Run the viewer in headless mode (no UI): print the circles for one
/// slider position and exit. A dataset that fails to load prints an empty
/// report, the same as the map showing no circles.
pub async fn run_headless(app: &App, position: u8, json: bool) -> Result<()> {
    let selection = Selection::from_slider(position);
    let loaded = load_dataset(&app.data_path).await;
    let report = build_report(loaded, selection, (app.today)());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_headless_text(&report));
    }

    Ok(())
}

fn render_headless_text(report: &HeadlessReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", report.label);
    let _ = writeln!(out, "{}", "=".repeat(report.label.chars().count()));
    let _ = writeln!(out, "Behaviour circles: {}", report.circles.len());

    for circle in &report.circles {
        let _ = writeln!(
            out,
            "- {:.4}, {:.4} | {} | {}m",
            circle.lat, circle.lon, circle.color, circle.radius
        );
        for row in &circle.details {
            let _ = writeln!(out, "    {}: {}", row.label, row.value);
        }
    }

    out
}

fn build_report(loaded: LoadResult<Dataset>, selection: Selection, today: NaiveDate) -> HeadlessReport {
    let mut circles: Vec<Circle> = Vec::new();
    redraw(&mut circles, loaded, selection, today);

    HeadlessReport {
        label: selection.label(today),
        date: selection.target_date(today),
        time_period: selection.period.as_str(),
        circles,
    }
}

#[derive(serde::Serialize)]
struct HeadlessReport {
    label: String,
    date: String,
    time_period: &'static str,
    circles: Vec<Circle>,
}

/// Run the main application event loop
pub async fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    app.initialize().await;

    loop {
        // Rotate notes
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code).await;
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(_) | Err(_) => {
                    // Ignore mouse, focus and paste events
                }
            }
        }
    }
    Ok(())
}
