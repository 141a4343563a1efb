//! Maps filtered questions to a display description.
//!
//! Nothing here touches the terminal; `ui` mounts the resulting [`Screen`].

mod math;

use std::collections::HashSet;

use crate::models::{Question, QuestionId};

pub use math::{typesetter, LatexTypesetter, Typesetter};

pub const SHOW_ANSWER_LABEL: &str = "👁️ Show Answer";
pub const HIDE_ANSWER_LABEL: &str = "🙈 Hide Answer";

/// Ids of the cards whose answer is currently shown.
pub type AnswerVisibility = HashSet<QuestionId>;

/// Colour family of a difficulty badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Easy,
    Medium,
    Hard,
    Neutral,
}

impl Tone {
    pub fn for_difficulty(difficulty: Option<&str>) -> Self {
        match difficulty {
            None | Some("medium") => Tone::Medium,
            Some("easy") => Tone::Easy,
            Some("hard") => Tone::Hard,
            Some(_) => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerView {
    pub visible: bool,
    pub text: String,
}

impl AnswerView {
    pub fn toggle_label(&self) -> &'static str {
        if self.visible {
            HIDE_ANSWER_LABEL
        } else {
            SHOW_ANSWER_LABEL
        }
    }
}

/// One display unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: QuestionId,
    /// 1-based position in the filtered sequence.
    pub number: usize,
    pub category: Option<String>,
    /// Upper-cased for display.
    pub difficulty: Option<String>,
    pub tone: Tone,
    pub body: String,
    pub answer: Option<AnswerView>,
}

impl CardView {
    pub fn heading(&self) -> String {
        format!("Question {}", self.number)
    }
}

/// Everything the question area can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Failed { message: String },
    NoResults,
    Cards(Vec<CardView>),
}

impl Screen {
    pub fn cards(&self) -> &[CardView] {
        match self {
            Screen::Cards(cards) => cards,
            _ => &[],
        }
    }
}

/// Build the screen for `questions`, replacing whatever was shown before.
pub fn render(
    questions: &[&Question],
    visible: &AnswerVisibility,
    typesetter: Option<&dyn Typesetter>,
) -> Screen {
    if questions.is_empty() {
        return Screen::NoResults;
    }

    let mut cards: Vec<CardView> = questions
        .iter()
        .enumerate()
        .map(|(index, question)| card(question, index + 1, visible))
        .collect();

    if let Some(typesetter) = typesetter {
        for card in &mut cards {
            card.body = typesetter.typeset(&card.body);
            if let Some(answer) = card.answer.as_mut() {
                answer.text = typesetter.typeset(&answer.text);
            }
        }
    }

    Screen::Cards(cards)
}

fn card(question: &Question, number: usize, visible: &AnswerVisibility) -> CardView {
    let record = &question.record;
    CardView {
        id: question.id,
        number,
        category: record.category().map(str::to_string),
        difficulty: record.difficulty().map(str::to_uppercase),
        tone: Tone::for_difficulty(record.difficulty()),
        body: record.body().to_string(),
        answer: record.answer().map(|text| AnswerView {
            visible: visible.contains(&question.id),
            text: text.to_string(),
        }),
    }
}
