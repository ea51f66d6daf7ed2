use dioxus::prelude::*;

/// Borderless button wrapping a single glyph
#[component]
pub fn IconButton(
    /// Accessible name, the glyph alone says nothing to screen readers
    label: String,
    class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            aria_label: "{label}",
            title: "{label}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
