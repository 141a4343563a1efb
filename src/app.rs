use log::{debug, error, info, warn};

use crate::data::{LoadError, QuestionStore};
use crate::filter::{filter, FilterControl, FilterSelection};
use crate::models::{AppState, Question, QuestionId};
use crate::render::{self, AnswerVisibility, Screen, Typesetter};

/// Session state: the loaded questions, the filter controls, and which
/// answers are open.
pub struct App {
    pub state: AppState,
    store: QuestionStore,
    category: FilterControl,
    difficulty: FilterControl,
    visible: AnswerVisibility,
    selected: usize,
    typesetter: Option<Box<dyn Typesetter>>,
    screen: Screen,
}

impl App {
    pub fn new(typesetter: Option<Box<dyn Typesetter>>) -> Self {
        Self {
            state: AppState::Loading,
            store: QuestionStore::default(),
            category: FilterControl::default(),
            difficulty: FilterControl::difficulties(),
            visible: AnswerVisibility::new(),
            selected: 0,
            typesetter,
            screen: Screen::Loading,
        }
    }

    /// Apply the outcome of the startup load. Ignored once the session has
    /// left `Loading`.
    pub fn finish_load(&mut self, result: Result<QuestionStore, LoadError>) {
        if self.state != AppState::Loading {
            return;
        }

        match result {
            Ok(store) => {
                if store.is_empty() {
                    warn!("Endpoint returned no questions");
                }
                info!("Showing {} questions", store.len());
                self.category = FilterControl::new(store.categories());
                self.store = store;
                self.state = AppState::Loaded;
                self.refilter();
            }
            Err(err) => {
                error!("Error fetching questions: {}", err);
                let message = err.to_string();
                self.state = AppState::LoadFailed {
                    message: message.clone(),
                };
                self.screen = Screen::Failed { message };
            }
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            category: self.category.current().clone(),
            difficulty: self.difficulty.current().clone(),
        }
    }

    pub fn category_control(&self) -> &FilterControl {
        &self.category
    }

    pub fn difficulty_control(&self) -> &FilterControl {
        &self.difficulty
    }

    pub fn total_questions(&self) -> usize {
        self.store.len()
    }

    pub fn filtered(&self) -> Vec<&Question> {
        filter(self.store.questions(), &self.selection())
    }

    /// Index of the highlighted card, if any card is shown.
    pub fn selected_card(&self) -> Option<usize> {
        (!self.screen.cards().is_empty()).then_some(self.selected)
    }

    pub fn next_category(&mut self) {
        if self.state == AppState::Loaded {
            self.category.select_next();
            self.refilter();
        }
    }

    pub fn previous_category(&mut self) {
        if self.state == AppState::Loaded {
            self.category.select_previous();
            self.refilter();
        }
    }

    pub fn next_difficulty(&mut self) {
        if self.state == AppState::Loaded {
            self.difficulty.select_next();
            self.refilter();
        }
    }

    pub fn previous_difficulty(&mut self) {
        if self.state == AppState::Loaded {
            self.difficulty.select_previous();
            self.refilter();
        }
    }

    pub fn select_next_card(&mut self) {
        let count = self.screen.cards().len();
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }

    pub fn select_previous_card(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Flip the answer of the highlighted card.
    pub fn toggle_selected_answer(&mut self) {
        if let Some(id) = self.screen.cards().get(self.selected).map(|card| card.id) {
            self.toggle_answer(id);
        }
    }

    /// Flip the answer of the card with `id`. Cards without an answer or not
    /// currently shown are left alone.
    pub fn toggle_answer(&mut self, id: QuestionId) {
        let has_answer = self
            .screen
            .cards()
            .iter()
            .any(|card| card.id == id && card.answer.is_some());
        if !has_answer {
            return;
        }

        if !self.visible.remove(&id) {
            self.visible.insert(id);
        }
        debug!("Toggled answer for question {}", id);
        self.rerender();
    }

    /// A filter changed: start again from a closed, top-of-list view.
    fn refilter(&mut self) {
        debug!(
            "Filtering by category {:?}, difficulty {:?}",
            self.category.current(),
            self.difficulty.current()
        );
        self.visible.clear();
        self.selected = 0;
        self.rerender();
    }

    fn rerender(&mut self) {
        let questions = filter(self.store.questions(), &self.selection());
        self.screen = render::render(&questions, &self.visible, self.typesetter.as_deref());
    }
}
