use crate::app::App;
use crate::ui::widgets::map::{decision_color, render_map};
use crate::ui::widgets::popup::centered_rect;
use crate::ui::widgets::slider::{day_headings, slider_line};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const INFO_TEXT: [&str; 3] = [
    "Circles show the forecast behaviour of deer and tahr for the selected day and time.",
    "Move through the next four days with the slider; pick a circle to see the weather behind it.",
    "Circle colors come straight from each forecast's decision.",
];

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and selected day/period
            Constraint::Min(8),    // Map and details
            Constraint::Length(3), // Note panel
            Constraint::Length(4), // Slider
            Constraint::Length(1), // Status
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_title_section(app, f, main_layout[0]);
    render_body(app, f, main_layout[1]);
    render_note_panel(app, f, main_layout[2]);
    render_slider_section(app, f, main_layout[3]);
    render_status(app, f, main_layout[4]);
    render_shortcuts(f, main_layout[5]);

    if app.modal.is_visible() {
        render_info_popup(f);
    }
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .title("== Movement Map ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let label = Paragraph::new(TextLine::from(Span::styled(
        app.label(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .block(title_block)
    .alignment(Alignment::Center);

    f.render_widget(label, area);
}

fn render_body(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    render_map(app, f, chunks[0]);
    render_detail_panel(app, f, chunks[1]);
}

fn render_detail_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Details ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let paragraph = Paragraph::new(Text::from(detail_lines(app)))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn detail_lines(app: &App) -> Vec<TextLine<'static>> {
    if !app.layer_visible {
        return vec![TextLine::from(Span::styled(
            "Behaviour layer hidden. Press b to show it.",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let Some(circle) = app.selected() else {
        return vec![TextLine::from(Span::styled(
            "No behaviour circles for this day and time.",
            Style::default().fg(Color::DarkGray),
        ))];
    };

    let mut lines = vec![
        TextLine::from(vec![
            Span::styled("● ", Style::default().fg(decision_color(&circle.color))),
            Span::styled(
                format!(
                    "Circle {} of {}",
                    app.selected_circle + 1,
                    app.visible_circles().len()
                ),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        TextLine::from(""),
    ];

    lines.extend(circle.details.iter().map(|row| {
        TextLine::from(vec![
            Span::styled(format!("{}: ", row.label), Style::default().fg(Color::Yellow)),
            Span::raw(row.value.clone()),
        ])
    }));
    lines
}

fn render_note_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let note = app.current_note.unwrap_or_default();
    let paragraph = Paragraph::new(note)
        .block(
            Block::default()
                .title(" Notes ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_slider_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        day_headings((app.today)()),
        slider_line(app.selection.current()),
    ];
    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .title(format!(" Time {} ", app.selection.current().slider_position()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(paragraph, area);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let style = if app.status_message.starts_with("Failed") {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };
    f.render_widget(
        Paragraph::new(Span::styled(app.status_message.clone(), style)),
        area,
    );
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let keys = [
        ("←/→", "time"),
        ("Home/End", "first/last"),
        ("b", "behaviour"),
        ("↑/↓", "circle"),
        ("+/-", "zoom"),
        ("r", "reload"),
        ("i", "info"),
        ("q", "quit"),
    ];

    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (key, action) in keys {
        spans.push(Span::styled(
            key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {action}  "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    f.render_widget(Paragraph::new(TextLine::from(spans)), area);
}

fn render_info_popup(f: &mut Frame<'_>) {
    let area = centered_rect(60, 40, f.area());
    f.render_widget(Clear, area);

    let mut lines: Vec<TextLine<'_>> = INFO_TEXT
        .iter()
        .flat_map(|text| [TextLine::from(*text), TextLine::from("")])
        .collect();
    lines.push(TextLine::from(Span::styled(
        "Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    let popup = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(" About this map ")
                .title_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(popup, area);
}
