use crate::app::layouts::DashboardLayout;
use crate::app::pages::placeholders::*;
use crate::config::AppConfig;
use crate::domain::models::NavigationModel;
use crate::domain::services::ChromeServices;
use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(DashboardLayout)]
    #[redirect("/", || Route::Dashboard {})]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/dashboard/ai-insights")]
    AiInsights {},
    #[route("/ai-dashboard")]
    AiDashboard {},
    #[route("/analytics")]
    Analytics {},
    #[route("/sales")]
    Sales {},
    #[route("/customers")]
    Customers {},
    #[route("/predictions")]
    Predictions {},
    #[route("/reports")]
    Reports {},
    #[route("/reports/:report_id")]
    ReportDetail { report_id: String },
    #[route("/notifications")]
    Notifications {},
    #[route("/security")]
    Security {},
    #[route("/settings")]
    Settings {},
    #[route("/support")]
    Support {},

    // Administration
    #[route("/admin/users")]
    AdminUsers {},
    #[route("/admin/logs")]
    AdminLogs {},
    #[route("/admin/performance")]
    AdminPerformance {},
    #[route("/admin/permissions")]
    AdminPermissions {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        DashboardApp {}
    }
}

/// Root component with injectable backends for search and notifications
#[component]
pub fn DashboardApp(#[props(default)] services: ChromeServices) -> Element {
    // Resolved on the server and shipped with the HTML so hydration sees the same values
    let config = use_server_cached(AppConfig::load_or_default);
    let show_admin = config.show_admin_section;

    use_context_provider(|| config);
    use_context_provider(|| services);
    use_context_provider(|| NavigationModel::canonical(show_admin));

    rsx! {
        Router::<Route> {}
    }
}
