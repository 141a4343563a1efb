use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use uuid::Uuid;

/// Body shown when a record carries neither `question` nor `text`.
pub const PLACEHOLDER_TEXT: &str = "No question text available";

/// A question object as it arrives from the endpoint.
///
/// Every field is optional on the wire. Numbers and booleans are kept as their
/// text, and empty strings are treated the same as missing ones by the
/// accessors below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuestionRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub difficulty: Option<String>,
}

impl QuestionRecord {
    /// Question body, falling back from `question` to `text` to the placeholder.
    pub fn body(&self) -> &str {
        present(&self.question)
            .or_else(|| present(&self.text))
            .unwrap_or(PLACEHOLDER_TEXT)
    }

    pub fn answer(&self) -> Option<&str> {
        present(&self.answer)
    }

    pub fn category(&self) -> Option<&str> {
        present(&self.category)
    }

    pub fn difficulty(&self) -> Option<&str> {
        present(&self.difficulty)
    }
}

/// Any scalar becomes text. `null`, arrays and objects count as missing.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Identity assigned to a record when it is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionId(Uuid);

impl QuestionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QuestionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A loaded record together with its stable id.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub record: QuestionRecord,
}

impl Question {
    pub fn new(record: QuestionRecord) -> Self {
        Self {
            id: QuestionId::new(),
            record,
        }
    }
}
