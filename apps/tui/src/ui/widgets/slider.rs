use chrono::NaiveDate;
use movement_core::domain::{DAY_COUNT, MAX_SLIDER_POSITION};
use movement_core::{Selection, TimePeriod};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const DAY_SEPARATOR: &str = "│";

/// The 32 slider stops, grouped by day, with the current one marked.
pub fn slider_line(selection: Selection) -> Line<'static> {
    let current = selection.slider_position();
    let mut spans = Vec::with_capacity(usize::from(MAX_SLIDER_POSITION) + usize::from(DAY_COUNT));

    for position in 0..=MAX_SLIDER_POSITION {
        if position > 0 && position % TimePeriod::COUNT == 0 {
            spans.push(Span::styled(DAY_SEPARATOR, Style::default().fg(Color::Gray)));
        }

        if position == current {
            spans.push(Span::styled(
                "●",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled("─", Style::default().fg(Color::DarkGray)));
        }
    }

    Line::from(spans)
}

/// Short weekday names aligned over each day's group of stops.
pub fn day_headings(today: NaiveDate) -> Line<'static> {
    let width = usize::from(TimePeriod::COUNT);
    let spans = (0..DAY_COUNT)
        .map(|day_offset| {
            let date = Selection {
                day_offset,
                period: TimePeriod::Night,
            }
            .date(today);
            let name = date.format("%a %-d").to_string();
            let mut heading = format!("{name:<width$}");
            heading.truncate(width);
            if day_offset + 1 < DAY_COUNT {
                heading.push(' ');
            }
            Span::styled(heading, Style::default().fg(Color::Gray))
        })
        .collect::<Vec<_>>();

    Line::from(spans)
}
