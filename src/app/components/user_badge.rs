use crate::config::AppConfig;
use dioxus::prelude::*;

/// Initials avatar with name and role, used in the sidebar and drawer footers
#[component]
pub fn UserBadge() -> Element {
    let config = use_context::<AppConfig>();
    let user = &config.user;
    let initials = user.initials();
    let avatar = config.allowed_avatar().map(str::to_string);

    rsx! {
        div { class: "c-user-badge",
            if let Some(src) = avatar {
                img { class: "c-user-badge__avatar", src: "{src}", alt: "{user.name}" }
            } else {
                div { class: "c-user-badge__avatar", "{initials}" }
            }
            div {
                p { class: "c-user-badge__name", "{user.name}" }
                p { class: "c-user-badge__role", "{user.role}" }
            }
        }
    }
}
