//! Category and difficulty filtering.

use crate::models::Question;

/// Difficulty values offered by the difficulty control.
pub const DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];

/// One filter value: everything, or an exact field value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    pub fn only(value: &str) -> Self {
        Self::Only(value.to_string())
    }

    /// Records without the field never match a specific value.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => value == Some(wanted.as_str()),
        }
    }

    /// Display label; the compared value is left untouched.
    pub fn label(&self) -> String {
        match self {
            Choice::All => "All".to_string(),
            Choice::Only(value) => capitalize(value),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub category: Choice,
    pub difficulty: Choice,
}

impl FilterSelection {
    pub fn accepts(&self, question: &Question) -> bool {
        self.category.matches(question.record.category())
            && self.difficulty.matches(question.record.difficulty())
    }
}

/// Questions passing `selection`, in their original order.
pub fn filter<'a>(all: &'a [Question], selection: &FilterSelection) -> Vec<&'a Question> {
    all.iter().filter(|q| selection.accepts(q)).collect()
}

/// Upper-case the first character only.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A selection control cycling through `All` and a fixed list of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    options: Vec<Choice>,
    selected: usize,
}

impl FilterControl {
    pub fn new<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let options = std::iter::once(Choice::All)
            .chain(values.into_iter().map(Choice::only))
            .collect();
        Self {
            options,
            selected: 0,
        }
    }

    pub fn difficulties() -> Self {
        Self::new(DIFFICULTIES)
    }

    pub fn current(&self) -> &Choice {
        &self.options[self.selected]
    }

    pub fn options(&self) -> &[Choice] {
        &self.options
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + self.options.len() - 1) % self.options.len();
    }
}

impl Default for FilterControl {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}
