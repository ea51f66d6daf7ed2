//! Header search input
//!
//! Holds the typed text locally and submits it on Enter through the
//! `SearchHandler` in context.

use crate::app::pages::routes::Route;
use crate::domain::services::{ChromeServices, SearchOutcome};
use crate::shared::hooks::use_search;
use dioxus::prelude::*;

#[component]
pub fn SearchBox(#[props(default = "Search...".to_string())] placeholder: String) -> Element {
    let mut search = use_search();
    let services = use_context::<ChromeServices>();
    let current_path = use_route::<Route>().to_string();
    let text = search.text;

    rsx! {
        div { class: "c-search-box",
            span { class: "c-search-box__icon", aria_hidden: "true", "🔍" }
            input {
                r#type: "search",
                class: "c-search-box__input",
                placeholder: "{placeholder}",
                aria_label: "Search",
                value: "{text}",
                oninput: move |evt| search.set_text(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() != Key::Enter {
                        return;
                    }
                    if let Some(SearchOutcome::Navigate(target)) = search.submit(&services, &current_path) {
                        search.clear();
                        navigator().push(target);
                    }
                },
            }
            if let Some(message) = search.feedback() {
                span { class: "c-search-box__feedback", role: "status", "{message}" }
            }
        }
    }
}
