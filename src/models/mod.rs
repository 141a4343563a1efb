mod question;

pub use question::{Question, QuestionId, QuestionRecord, PLACEHOLDER_TEXT};

/// Lifecycle of a browsing session.
///
/// `Loading` moves to exactly one of the other two states. `LoadFailed` is
/// final; `Loaded` stays put while filters change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    Loading,
    Loaded,
    LoadFailed { message: String },
}
