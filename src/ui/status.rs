//! Loading, error and empty states of the question area.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

pub fn render_loading(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("Loading questions...")
        .alignment(Alignment::Center)
        .fg(Color::Yellow);
    frame.render_widget(widget, centered(area, 1));
}

pub fn render_no_results(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("No questions match the selected filters.")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, centered(area, 1));
}

pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let content = vec![
        Line::from(vec![
            Span::styled("Error! ", Style::default().fg(Color::Red).bold()),
            Span::styled(
                "Unable to load questions. Please check your API endpoint.",
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("Error: {}", message),
            Style::default().fg(Color::Gray),
        )),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, panel_area(area));
}

fn panel_area(area: Rect) -> Rect {
    Rect {
        height: area.height.min(7),
        ..area
    }
}

fn centered(area: Rect, height: u16) -> Rect {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);
    chunks[1]
}
