//! Route targets. Business features (sales, predictions, ...) are served by
//! other applications, so each page only names itself.

use crate::app::components::PlaceholderPage;
use crate::app::pages::routes::Route;
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        PlaceholderPage { title: "Dashboard", description: "Key business metrics at a glance." }
    }
}

#[component]
pub fn AiInsights() -> Element {
    rsx! {
        PlaceholderPage {
            title: "AI Insights",
            description: "Sales forecasts, inventory optimisation and anomaly detection.",
        }
    }
}

#[component]
pub fn AiDashboard() -> Element {
    rsx! {
        PlaceholderPage { title: "AI Dashboard", description: "Model status and recent predictions." }
    }
}

#[component]
pub fn Analytics() -> Element {
    rsx! {
        PlaceholderPage { title: "Analytics", description: "Traffic, conversion and revenue trends." }
    }
}

#[component]
pub fn Sales() -> Element {
    rsx! {
        PlaceholderPage { title: "Sales", description: "Orders, deals and revenue." }
    }
}

#[component]
pub fn Customers() -> Element {
    rsx! {
        PlaceholderPage { title: "Customers", description: "Accounts, segments and retention." }
    }
}

#[component]
pub fn Predictions() -> Element {
    rsx! {
        PlaceholderPage { title: "Predictions", description: "Demand and churn forecasts." }
    }
}

#[component]
pub fn Reports() -> Element {
    rsx! {
        PlaceholderPage { title: "Reports", description: "Scheduled and ad-hoc reports." }
    }
}

#[component]
pub fn ReportDetail(report_id: String) -> Element {
    rsx! {
        PlaceholderPage { title: "Report {report_id}", description: "Report details." }
        Link { to: Route::Reports {}, class: "c-page__back", "← All reports" }
    }
}

#[component]
pub fn Notifications() -> Element {
    rsx! {
        PlaceholderPage { title: "Notifications", description: "Alerts and system messages." }
    }
}

#[component]
pub fn Security() -> Element {
    rsx! {
        PlaceholderPage { title: "Security", description: "Sessions, API keys and audit trail." }
    }
}

#[component]
pub fn Settings() -> Element {
    rsx! {
        PlaceholderPage { title: "Settings", description: "Account and workspace preferences." }
    }
}

#[component]
pub fn Support() -> Element {
    rsx! {
        PlaceholderPage { title: "Support", description: "Documentation and contact options." }
    }
}

#[component]
pub fn AdminUsers() -> Element {
    rsx! {
        PlaceholderPage { title: "User Management", description: "Invite, disable and assign roles." }
    }
}

#[component]
pub fn AdminLogs() -> Element {
    rsx! {
        PlaceholderPage { title: "System Logs", description: "Service logs and events." }
    }
}

#[component]
pub fn AdminPerformance() -> Element {
    rsx! {
        PlaceholderPage { title: "Performance", description: "Latency and resource usage." }
    }
}

#[component]
pub fn AdminPermissions() -> Element {
    rsx! {
        PlaceholderPage { title: "Permissions", description: "Role and access policies." }
    }
}

/// Unknown paths still render inside the chrome, with nothing highlighted
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(path = %path, "No route for path");

    rsx! {
        section { class: "c-page c-page--not-found",
            h1 { class: "c-page__title", "Page not found" }
            p { class: "c-page__description", "Nothing lives at {path}." }
            Link { to: Route::Dashboard {}, "Back to the dashboard" }
        }
    }
}
