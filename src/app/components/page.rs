use crate::config::AppConfig;
use dioxus::prelude::*;
use dioxus::document;

/// Static content for pages whose features live elsewhere
#[component]
pub fn PlaceholderPage(title: String, description: String) -> Element {
    let config = use_context::<AppConfig>();
    let document_title = format!("{} · {}", title, config.brand_title);

    rsx! {
        document::Title { "{document_title}" }
        section { class: "c-page",
            h1 { class: "c-page__title", "{title}" }
            p { class: "c-page__description", "{description}" }
        }
    }
}
