use crate::app::components::{IconButton, NavList, NavVariant, UserBadge};
use crate::config::AppConfig;
use crate::domain::models::{NavigationModel, OverlayTrigger};
use dioxus::prelude::*;

/// Controls inside the drawer that dismiss it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DrawerControl {
    Backdrop,
    CloseButton,
    NavLink,
}

impl DrawerControl {
    fn trigger(self) -> OverlayTrigger {
        match self {
            DrawerControl::Backdrop => OverlayTrigger::Backdrop,
            DrawerControl::CloseButton => OverlayTrigger::CloseButton,
            DrawerControl::NavLink => OverlayTrigger::NavigationSelected,
        }
    }
}

/// Slide-in navigation drawer for narrow screens
///
/// Stateless: `is_open` comes from the layout and every way out reports its
/// trigger through `on_close`.
#[component]
pub fn MobileMenu(is_open: bool, on_close: EventHandler<OverlayTrigger>) -> Element {
    let config = use_context::<AppConfig>();
    let model = use_context::<NavigationModel>();

    if !is_open {
        return rsx! {};
    }

    rsx! {
        div { class: "c-mobile-menu", role: "dialog", aria_modal: "true",
            div {
                class: "c-mobile-menu__backdrop",
                onclick: move |_| on_close.call(DrawerControl::Backdrop.trigger()),
            }

            div { class: "c-mobile-menu__panel",
                div { class: "c-mobile-menu__header",
                    div {
                        h1 { class: "c-mobile-menu__title", "{config.breadcrumb_root}" }
                        p { class: "c-sidebar__subtitle", "{config.brand_subtitle}" }
                    }
                    IconButton {
                        label: "Close sidebar",
                        class: "c-mobile-menu__close",
                        onclick: move |_| on_close.call(DrawerControl::CloseButton.trigger()),
                        "×"
                    }
                }

                nav { class: "c-mobile-menu__nav",
                    for section in model.sections() {
                        NavList {
                            key: "{section.as_str()}",
                            section,
                            variant: NavVariant::Drawer,
                            on_select: move |_| on_close.call(DrawerControl::NavLink.trigger()),
                        }
                    }
                }

                div { class: "c-mobile-menu__footer",
                    UserBadge {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::OverlayState;

    const CONTROLS: [DrawerControl; 3] = [
        DrawerControl::Backdrop,
        DrawerControl::CloseButton,
        DrawerControl::NavLink,
    ];

    #[test]
    fn test_each_control_reports_its_own_trigger() {
        let triggers: Vec<OverlayTrigger> = CONTROLS.iter().map(|c| c.trigger()).collect();
        assert_eq!(
            triggers,
            vec![
                OverlayTrigger::Backdrop,
                OverlayTrigger::CloseButton,
                OverlayTrigger::NavigationSelected,
            ]
        );
    }

    #[test]
    fn test_every_control_closes_the_drawer() {
        for control in CONTROLS {
            assert!(!control.trigger().opens());
            assert_eq!(OverlayState::Open.apply(control.trigger()), OverlayState::Closed);
        }
    }
}
