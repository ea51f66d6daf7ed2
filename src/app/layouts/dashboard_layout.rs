use crate::app::layouts::{Header, MobileMenu, Sidebar};
use crate::app::pages::routes::Route;
use crate::shared::hooks::use_overlay;
use dioxus::prelude::*;
use dioxus::document;

/// Page chrome around every routed page
///
/// ```text
/// +---------+-----------------------------------+
/// | Sidebar |  Header (menu, breadcrumb, tools) |
/// |         +-----------------------------------+
/// |         |  Outlet                           |
/// +---------+-----------------------------------+
/// ```
///
/// The layout is the only owner of the mobile drawer state: the header gets
/// a handler that opens it, the drawer a handler that closes it.
#[component]
pub fn DashboardLayout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let mut overlay = use_overlay();

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        div { class: "c-layout",
            MobileMenu {
                is_open: overlay.is_open(),
                on_close: move |trigger| overlay.dispatch(trigger),
            }

            Sidebar {}

            div { class: "c-layout__body",
                Header { on_menu_click: move |_| overlay.open() }

                main { class: "c-layout__main",
                    div { class: "c-layout__content",
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}
