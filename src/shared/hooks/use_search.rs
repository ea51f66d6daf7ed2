use crate::domain::services::{ChromeServices, SearchOutcome};
use dioxus::prelude::*;

/// Header search box state
#[derive(Clone, Copy, PartialEq)]
pub struct SearchState {
    pub text: Signal<String>,
    pub last_outcome: Signal<Option<SearchOutcome>>,
}

impl SearchState {
    /// Typing again hides the previous outcome
    pub fn set_text(&mut self, value: String) {
        self.text.set(value);
        if self.last_outcome.peek().is_some() {
            self.last_outcome.set(None);
        }
    }

    /// Hands the current text to the configured handler; blank input is a no-op
    pub fn submit(&mut self, services: &ChromeServices, origin_path: &str) -> Option<SearchOutcome> {
        let text = self.text.peek().clone();
        let outcome = services.submit_search(&text, origin_path)?;
        self.last_outcome.set(Some(outcome.clone()));
        Some(outcome)
    }

    pub fn feedback(&self) -> Option<&'static str> {
        self.last_outcome.read().as_ref().and_then(SearchOutcome::feedback)
    }

    pub fn clear(&mut self) {
        self.text.set(String::new());
        self.last_outcome.set(None);
    }
}

pub fn use_search() -> SearchState {
    let text = use_signal(String::new);
    let last_outcome = use_signal(|| None::<SearchOutcome>);

    SearchState { text, last_outcome }
}
