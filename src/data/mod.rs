mod loader;
mod store;

pub use loader::{load, parse_questions, LoadError, QuestionSource};
pub use store::QuestionStore;
