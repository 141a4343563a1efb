mod cards;
mod filters;
mod status;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::AppState;
use crate::render::Screen;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_title(frame, chunks[0], app);
    filters::render(frame, chunks[1], app);

    match app.screen() {
        Screen::Loading => status::render_loading(frame, chunks[2]),
        Screen::Failed { message } => status::render_error(frame, chunks[2], message),
        Screen::NoResults => status::render_no_results(frame, chunks[2]),
        Screen::Cards(cards) => cards::render(frame, chunks[2], cards, app.selected_card()),
    }

    render_controls(frame, chunks[3], &app.state);
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let count = match app.state {
        AppState::Loaded => format!(
            "{}/{}",
            app.screen().cards().len(),
            app.total_questions()
        ),
        _ => String::new(),
    };

    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).split(area);
    frame.render_widget(
        Paragraph::new("QUESTION BANK").fg(Color::Cyan).bold(),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(count)
            .alignment(Alignment::Right)
            .fg(Color::DarkGray),
        chunks[1],
    );
}

fn render_controls(frame: &mut Frame, area: Rect, state: &AppState) {
    let hint = match state {
        AppState::Loaded => {
            "c/C category  ·  d/D difficulty  ·  j/k move  ·  enter answer  ·  q quit"
        }
        AppState::Loading | AppState::LoadFailed { .. } => "q quit",
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::data::{parse_questions, LoadError, QuestionStore};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn loaded(json: &str) -> App {
        let mut app = App::new(None);
        app.finish_load(Ok(QuestionStore::from_records(parse_questions(json).unwrap())));
        app
    }

    #[test]
    fn test_loading_indicator() {
        let screen = draw(&App::new(None));
        assert!(screen.contains("Loading questions..."));
        assert!(!screen.contains("Question 1"));
    }

    #[test]
    fn test_error_panel_without_cards() {
        let mut app = App::new(None);
        app.finish_load(Err(LoadError::Fetch(
            "Failed to fetch questions (HTTP 404 Not Found)".to_string(),
        )));

        let screen = draw(&app);
        assert_eq!(screen.matches("Unable to load questions").count(), 1);
        assert!(screen.contains("Error: Failed to fetch questions (HTTP 404 Not Found)"));
        assert!(!screen.contains("Question 1"));
        assert!(!screen.contains("Loading questions..."));
    }

    #[test]
    fn test_cards_and_badges() {
        let app = loaded(
            r#"[{"question":"2+2?","answer":"4","category":"arithmetic","difficulty":"easy"},
                {"category":"logic"}]"#,
        );
        let screen = draw(&app);

        assert!(screen.contains("Question 1"));
        assert!(screen.contains("Question 2"));
        assert!(screen.contains("arithmetic"));
        assert!(screen.contains("EASY"));
        assert!(screen.contains("2+2?"));
        assert!(screen.contains("No question text available"));
        assert_eq!(screen.matches("Show Answer").count(), 1);
        assert!(!screen.contains("Answer:"));
        assert!(screen.contains("Category"));
    }

    #[test]
    fn test_open_answer_is_drawn() {
        let mut app = loaded(r#"[{"question":"2+2?","answer":"four"}]"#);
        app.toggle_selected_answer();

        let screen = draw(&app);
        assert!(screen.contains("Hide Answer"));
        assert!(screen.contains("Answer:"));
        assert!(screen.contains("four"));
    }

    #[test]
    fn test_no_results_indicator() {
        let mut app = loaded(r#"[{"question":"2+2?","difficulty":"easy"}]"#);
        app.previous_difficulty();

        let screen = draw(&app);
        assert!(screen.contains("No questions match the selected filters."));
        assert!(!screen.contains("Question 1"));
    }
}
