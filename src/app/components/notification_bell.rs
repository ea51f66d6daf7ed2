use crate::domain::services::ChromeServices;
use dioxus::prelude::*;

/// Header bell with the unread count from the configured source
#[component]
pub fn NotificationBell() -> Element {
    let services = use_context::<ChromeServices>();
    let unread = services.notifications.unread_count();
    let badge = services.unread_badge();
    let label = match unread {
        0 => "Notifications".to_string(),
        n => format!("Notifications ({} unread)", n),
    };

    rsx! {
        button {
            r#type: "button",
            class: "c-notification-bell",
            aria_label: "{label}",
            title: "{label}",
            "🔔"
            if let Some(badge) = badge {
                span { class: "c-notification-bell__badge", "{badge}" }
            }
        }
    }
}
