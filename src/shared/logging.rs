//! Structured logging helpers for the dashboard chrome
//!
//! Every event carries an `operation` field so logs can be filtered per concern.

use crate::domain::models::{NavigationModel, OverlayState, OverlayTrigger};

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Navigation,
    Overlay,
    Search,
    Config,
    Server,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Navigation => "navigation",
            LogOperation::Overlay => "overlay",
            LogOperation::Search => "search",
            LogOperation::Config => "config",
            LogOperation::Server => "server",
        }
    }
}

/// Log which entry (if any) the current path resolved to
pub fn log_route_resolved(path: &str, active_label: Option<&str>) {
    match active_label {
        Some(label) => tracing::debug!(
            operation = LogOperation::Navigation.as_str(),
            path = path,
            active = label,
            "Route matched navigation entry"
        ),
        None => tracing::debug!(
            operation = LogOperation::Navigation.as_str(),
            path = path,
            "Route matched no navigation entry"
        ),
    }
}

pub fn log_overlay_transition(from: OverlayState, to: OverlayState, trigger: OverlayTrigger) {
    tracing::trace!(
        operation = LogOperation::Overlay.as_str(),
        from = from.as_str(),
        to = to.as_str(),
        trigger = trigger.as_str(),
        "Mobile menu transition"
    );
}

pub fn log_search_submitted(handler: &str, origin: &str, query_len: usize) {
    tracing::info!(
        operation = LogOperation::Search.as_str(),
        handler = handler,
        origin = origin,
        query_len = query_len,
        "Search submitted"
    );
}

pub fn log_config_loaded(source: &str, image_domains: usize) {
    tracing::info!(
        operation = LogOperation::Config.as_str(),
        source = source,
        image_domains = image_domains,
        "Configuration loaded"
    );
}

pub fn log_config_error(source: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Config.as_str(),
        source = source,
        error = error,
        "Falling back to default configuration"
    );
}

/// Warn once per overlapping pair of entries; returns how many were reported
pub fn log_navigation_conflicts(model: &NavigationModel) -> usize {
    let conflicts = model.conflicts();
    for (outer, inner) in &conflicts {
        tracing::warn!(
            operation = LogOperation::Navigation.as_str(),
            outer = *outer,
            inner = *inner,
            "Navigation entries overlap: both highlight on the inner path"
        );
    }
    conflicts.len()
}

pub fn log_server_start(addr: &str) {
    tracing::info!(
        operation = LogOperation::Server.as_str(),
        addr = addr,
        "Server listening"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::Overlay.as_str(), "overlay");
        assert_eq!(LogOperation::Search.as_str(), "search");
        assert_eq!(LogOperation::Config.as_str(), "config");
        assert_eq!(LogOperation::Server.as_str(), "server");
    }

    #[test]
    fn test_navigation_conflicts_reported() {
        use crate::domain::models::{NavIcon, NavItem, NavSection};

        assert_eq!(log_navigation_conflicts(&NavigationModel::canonical(true)), 0);

        static OVERLAPPING: &[NavItem] = &[
            NavItem::prefix("Dashboard", "/dashboard", NavIcon::Dashboard),
            NavItem::exact("AI Insights", "/dashboard/ai-insights", NavIcon::AiInsights),
        ];
        let model = NavigationModel::from_sections(vec![(NavSection::Main, OVERLAPPING)]);
        assert_eq!(log_navigation_conflicts(&model), 1);
    }
}
