use crate::app::pages::routes::Route;
use crate::domain::models::{NavIcon, NavRow, NavSection, NavigationModel};
use crate::domain::services::ChromeServices;
use dioxus::prelude::*;

/// Where a list is rendered; only affects presentation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVariant {
    Desktop,
    Drawer,
}

/// One section of the navigation model, highlighted against the current route
#[component]
pub fn NavList(
    section: NavSection,
    variant: NavVariant,
    /// Fired after any entry is picked
    on_select: Option<EventHandler<()>>,
) -> Element {
    let model = use_context::<NavigationModel>();
    let services = use_context::<ChromeServices>();
    let current_path = use_route::<Route>().to_string();

    let rows = model.section_rows(section, &current_path);
    let unread = services.unread_badge();

    rsx! {
        div { class: "c-nav-section c-nav-section--{section.as_str()}",
            if let Some(heading) = section.heading() {
                div { class: "c-nav-section__heading", "{heading}" }
            }
            for row in rows {
                NavRowLink {
                    key: "{row.item.path}",
                    row,
                    unread: unread.clone(),
                    variant,
                    on_select,
                }
            }
        }
    }
}

#[component]
pub fn NavRowLink(
    row: NavRow,
    variant: NavVariant,
    /// Unread badge text, shown on the Notifications entry
    unread: Option<String>,
    on_select: Option<EventHandler<()>>,
) -> Element {
    let mut class = String::from("c-nav-row");
    if row.active {
        class.push_str(" c-nav-row--active");
    }
    if row.section == NavSection::Admin {
        class.push_str(" c-nav-row--admin");
    }

    let badge = unread.filter(|_| row.item.icon == NavIcon::Notifications);
    let label = row.item.label;
    let glyph = row.item.icon.glyph();
    // The dot duplicates the highlight on wide screens only
    let show_dot = row.active && variant == NavVariant::Desktop && badge.is_none();

    rsx! {
        Link {
            to: row.item.path,
            class: "{class}",
            onclick: move |_| {
                if let Some(handler) = &on_select {
                    handler.call(());
                }
            },
            span { class: "c-nav-row__icon", "{glyph}" }
            span { class: "c-nav-row__label", "{label}" }
            if let Some(count) = badge {
                span { class: "c-nav-row__badge", "{count}" }
            }
            if show_dot {
                span { class: "c-nav-row__dot" }
            }
        }
    }
}
