use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::filter::FilterControl;
use crate::models::AppState;

/// Category and difficulty controls, side by side.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.state == AppState::Loaded;
    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    render_control(frame, chunks[0], " Category [c] ", app.category_control(), active);
    render_control(
        frame,
        chunks[1],
        " Difficulty [d] ",
        app.difficulty_control(),
        active,
    );
}

fn render_control(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    control: &FilterControl,
    active: bool,
) {
    let (value_style, arrow_style) = if active {
        (
            Style::default().fg(Color::Yellow).bold(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    };

    let content = Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(control.current().label(), value_style),
        Span::styled(" ▶", arrow_style),
    ]);

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .title_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(widget, area);
}
