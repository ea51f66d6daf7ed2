use crate::app::components::{IconButton, NotificationBell, SearchBox, ThemeToggle};
use crate::app::pages::routes::Route;
use crate::config::AppConfig;
use crate::domain::models::NavigationModel;
use crate::shared::logging::log_route_resolved;
use dioxus::prelude::*;

/// Top bar: drawer button, breadcrumb, search and notifications
#[component]
pub fn Header(on_menu_click: EventHandler<()>) -> Element {
    let config = use_context::<AppConfig>();
    let model = use_context::<NavigationModel>();
    let current_path = use_route::<Route>().to_string();

    let active_label = model.active_item(&current_path).map(|item| item.label);
    log_route_resolved(&current_path, active_label);

    let page_label = active_label
        .map(str::to_string)
        .unwrap_or_else(|| config.brand_subtitle.clone());

    rsx! {
        header { class: "c-header",
            div { class: "c-header__left",
                IconButton {
                    label: "Open sidebar",
                    class: "c-header__menu-button",
                    onclick: move |_| on_menu_click.call(()),
                    "☰"
                }
                nav { class: "c-breadcrumb", aria_label: "Breadcrumb",
                    span { class: "c-breadcrumb__root", "{config.breadcrumb_root}" }
                    span { class: "c-breadcrumb__separator", "/" }
                    span { class: "c-breadcrumb__current", "{page_label}" }
                }
            }

            div { class: "c-header__right",
                SearchBox {}
                ThemeToggle {}
                NotificationBell {}
            }
        }
    }
}
