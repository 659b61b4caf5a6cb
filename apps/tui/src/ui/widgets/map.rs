use crate::app::App;
use movement_core::view::meters_to_degrees;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Circle, Map, MapResolution};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;
use std::str::FromStr;

/// Terminal color for a decision token. Named colors and `#rrggbb` are
/// understood; anything else is drawn gray.
pub fn decision_color(decision: &str) -> Color {
    match decision.trim().to_lowercase().as_str() {
        "orange" => Color::Rgb(255, 165, 0),
        "amber" => Color::Rgb(255, 191, 0),
        other => Color::from_str(other).unwrap_or(Color::Gray),
    }
}

pub fn render_map(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title = if app.layer_visible {
        " Map "
    } else {
        " Map (behaviour hidden) "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let circles = app.visible_circles();
    let selected = app.selected_circle;
    let viewport = app.viewport;

    f.render_widget(
        Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds(viewport.x_bounds())
            .y_bounds(viewport.y_bounds())
            .paint(|ctx| {
                ctx.draw(&Map {
                    resolution: MapResolution::High,
                    color: Color::DarkGray,
                });
                ctx.layer();

                for (index, circle) in circles.iter().enumerate() {
                    let color = decision_color(&circle.color);
                    let radius = meters_to_degrees(circle.radius);
                    ctx.draw(&Circle {
                        x: circle.lon,
                        y: circle.lat,
                        radius,
                        color,
                    });

                    let style = if index == selected {
                        Style::default().fg(color).add_modifier(Modifier::BOLD | Modifier::REVERSED)
                    } else {
                        Style::default().fg(color)
                    };
                    ctx.print(circle.lon, circle.lat, Span::styled("●", style));
                }
            }),
        area,
    );
}
