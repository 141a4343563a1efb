use std::collections::BTreeSet;

use crate::models::{Question, QuestionRecord};

/// Questions loaded for the session plus the categories seen among them.
///
/// Written once when the load completes and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct QuestionStore {
    questions: Vec<Question>,
    categories: BTreeSet<String>,
}

impl QuestionStore {
    pub fn from_records(records: Vec<QuestionRecord>) -> Self {
        let questions: Vec<Question> = records.into_iter().map(Question::new).collect();
        let categories = questions
            .iter()
            .filter_map(|question| question.record.category())
            .map(str::to_string)
            .collect();

        Self {
            questions,
            categories,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Distinct non-empty categories, sorted.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: Option<&str>) -> QuestionRecord {
        QuestionRecord {
            question: Some("q".to_string()),
            category: category.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_categories_are_distinct_and_skip_missing() {
        let store = QuestionStore::from_records(vec![
            record(Some("calculus")),
            record(None),
            record(Some("algebra")),
            record(Some("calculus")),
            record(Some("")),
        ]);

        assert_eq!(store.len(), 5);
        assert_eq!(
            store.categories().collect::<Vec<_>>(),
            vec!["algebra", "calculus"]
        );
    }

    #[test]
    fn test_order_is_preserved() {
        let store = QuestionStore::from_records(vec![record(Some("b")), record(Some("a"))]);
        let categories: Vec<_> = store
            .questions()
            .iter()
            .map(|q| q.record.category().unwrap())
            .collect();
        assert_eq!(categories, vec!["b", "a"]);
    }
}
