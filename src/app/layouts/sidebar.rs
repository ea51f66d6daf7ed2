use crate::app::components::{NavList, NavVariant, UserBadge};
use crate::config::AppConfig;
use crate::domain::models::{NavSection, NavigationModel};
use dioxus::prelude::*;

/// Fixed desktop sidebar; hidden below the `md` breakpoint by CSS
#[component]
pub fn Sidebar() -> Element {
    let config = use_context::<AppConfig>();
    let model = use_context::<NavigationModel>();

    rsx! {
        aside { class: "c-sidebar",
            div { class: "c-sidebar__brand",
                h1 { class: "c-sidebar__title", "{config.brand_title}" }
                p { class: "c-sidebar__subtitle", "{config.brand_subtitle}" }
            }

            nav { class: "c-sidebar__nav",
                for section in model.sections().filter(|s| *s != NavSection::Secondary) {
                    NavList { key: "{section.as_str()}", section, variant: NavVariant::Desktop }
                }
            }

            div { class: "c-sidebar__footer",
                if model.sections().any(|s| s == NavSection::Secondary) {
                    NavList { section: NavSection::Secondary, variant: NavVariant::Desktop }
                }
                UserBadge {}
            }
        }
    }
}
