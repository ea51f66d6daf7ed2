use crate::shared::hooks::{apply_theme, save_theme, use_theme};
use dioxus::prelude::*;

/// Light/dark switch in the header
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    // Icon shows what a click switches to
    let target = theme().toggled();
    let tooltip = format!("Switch to {} mode", target.as_str());

    rsx! {
        button {
            r#type: "button",
            class: "c-theme-toggle",
            aria_label: "{tooltip}",
            title: "{tooltip}",
            onclick: move |_| {
                let next = theme().toggled();
                theme.set(next);
                apply_theme(next);
                save_theme(next);
            },
            "{target.icon()}"
        }
    }
}
