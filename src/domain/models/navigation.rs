//! Canonical navigation model shared by the sidebar and the mobile drawer.
//!
//! Every chrome component reads the same [`NavigationModel`]; each item carries
//! its own [`MatchPolicy`] so highlighting never depends on how a path looks.

use serde::{Deserialize, Serialize};

/// How an item's configured path is compared against the router path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPolicy {
    /// Active only when the paths are identical
    Exact,
    /// Active for the path itself and any nested route below it
    Prefix,
}

impl MatchPolicy {
    pub fn matches(&self, current: &str, configured: &str) -> bool {
        match self {
            MatchPolicy::Exact => current == configured,
            MatchPolicy::Prefix => {
                current == configured
                    || current
                        .strip_prefix(configured)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }
}

/// Glyph shown next to a navigation label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavIcon {
    Dashboard,
    AiInsights,
    AiDashboard,
    Analytics,
    Sales,
    Customers,
    Predictions,
    Reports,
    Notifications,
    Security,
    Settings,
    Support,
    Users,
    Logs,
    Performance,
    Permissions,
}

impl NavIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            NavIcon::Dashboard => "📊",
            NavIcon::AiInsights => "🧠",
            NavIcon::AiDashboard => "🤖",
            NavIcon::Analytics => "📈",
            NavIcon::Sales => "💰",
            NavIcon::Customers => "👥",
            NavIcon::Predictions => "🔮",
            NavIcon::Reports => "📋",
            NavIcon::Notifications => "🔔",
            NavIcon::Security => "🔒",
            NavIcon::Settings => "⚙️",
            NavIcon::Support => "❓",
            NavIcon::Users => "🧑‍💼",
            NavIcon::Logs => "🗄️",
            NavIcon::Performance => "⚡",
            NavIcon::Permissions => "🔐",
        }
    }

    /// Stable identifier, used for `data-icon` attributes
    pub fn as_str(&self) -> &'static str {
        match self {
            NavIcon::Dashboard => "dashboard",
            NavIcon::AiInsights => "ai-insights",
            NavIcon::AiDashboard => "ai-dashboard",
            NavIcon::Analytics => "analytics",
            NavIcon::Sales => "sales",
            NavIcon::Customers => "customers",
            NavIcon::Predictions => "predictions",
            NavIcon::Reports => "reports",
            NavIcon::Notifications => "notifications",
            NavIcon::Security => "security",
            NavIcon::Settings => "settings",
            NavIcon::Support => "support",
            NavIcon::Users => "users",
            NavIcon::Logs => "logs",
            NavIcon::Performance => "performance",
            NavIcon::Permissions => "permissions",
        }
    }
}

/// A labeled, iconified link to a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
    pub policy: MatchPolicy,
}

impl NavItem {
    pub const fn exact(label: &'static str, path: &'static str, icon: NavIcon) -> Self {
        Self { label, path, icon, policy: MatchPolicy::Exact }
    }

    pub const fn prefix(label: &'static str, path: &'static str, icon: NavIcon) -> Self {
        Self { label, path, icon, policy: MatchPolicy::Prefix }
    }

    /// Expects a path already passed through [`normalize_path`]
    pub fn is_active(&self, current_path: &str) -> bool {
        self.policy.matches(current_path, self.path)
    }
}

/// Groups of items rendered under their own heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavSection {
    Main,
    Secondary,
    Admin,
}

impl NavSection {
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            NavSection::Main => None,
            NavSection::Secondary => None,
            NavSection::Admin => Some("Administration"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavSection::Main => "main",
            NavSection::Secondary => "secondary",
            NavSection::Admin => "admin",
        }
    }
}

pub static MAIN_NAVIGATION: &[NavItem] = &[
    NavItem::exact("Dashboard", "/dashboard", NavIcon::Dashboard),
    NavItem::exact("AI Insights", "/dashboard/ai-insights", NavIcon::AiInsights),
    NavItem::exact("AI Dashboard", "/ai-dashboard", NavIcon::AiDashboard),
    NavItem::prefix("Analytics", "/analytics", NavIcon::Analytics),
    NavItem::prefix("Sales", "/sales", NavIcon::Sales),
    NavItem::prefix("Customers", "/customers", NavIcon::Customers),
    NavItem::prefix("Predictions", "/predictions", NavIcon::Predictions),
    NavItem::prefix("Reports", "/reports", NavIcon::Reports),
    NavItem::exact("Notifications", "/notifications", NavIcon::Notifications),
    NavItem::prefix("Security", "/security", NavIcon::Security),
];

pub static SECONDARY_NAVIGATION: &[NavItem] = &[
    NavItem::prefix("Settings", "/settings", NavIcon::Settings),
    NavItem::prefix("Support", "/support", NavIcon::Support),
];

pub static ADMIN_NAVIGATION: &[NavItem] = &[
    NavItem::prefix("User Management", "/admin/users", NavIcon::Users),
    NavItem::prefix("System Logs", "/admin/logs", NavIcon::Logs),
    NavItem::prefix("Performance", "/admin/performance", NavIcon::Performance),
    NavItem::prefix("Permissions", "/admin/permissions", NavIcon::Permissions),
];

/// One renderable line of a navigation list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavRow {
    pub item: NavItem,
    pub section: NavSection,
    pub active: bool,
}

/// Ordered list of sections consumed by every chrome component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationModel {
    sections: Vec<(NavSection, &'static [NavItem])>,
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::canonical(true)
    }
}

impl NavigationModel {
    pub fn canonical(include_admin: bool) -> Self {
        let mut sections = vec![
            (NavSection::Main, MAIN_NAVIGATION),
            (NavSection::Secondary, SECONDARY_NAVIGATION),
        ];
        if include_admin {
            sections.push((NavSection::Admin, ADMIN_NAVIGATION));
        }
        Self { sections }
    }

    pub fn from_sections(sections: Vec<(NavSection, &'static [NavItem])>) -> Self {
        Self { sections }
    }

    pub fn items(&self) -> impl Iterator<Item = (NavSection, &NavItem)> + '_ {
        self.sections
            .iter()
            .flat_map(|(section, items)| items.iter().map(move |item| (*section, item)))
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(|(_, items)| items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows for one section, flagged against the (raw) router path
    pub fn section_rows(&self, section: NavSection, current_path: &str) -> Vec<NavRow> {
        let current = normalize_path(current_path);
        self.sections
            .iter()
            .filter(|(s, _)| *s == section)
            .flat_map(|(_, items)| items.iter())
            .map(|item| NavRow {
                item: item.clone(),
                section,
                active: item.is_active(&current),
            })
            .collect()
    }

    pub fn rows(&self, current_path: &str) -> Vec<NavRow> {
        let current = normalize_path(current_path);
        self.items()
            .map(|(section, item)| NavRow {
                item: item.clone(),
                section,
                active: item.is_active(&current),
            })
            .collect()
    }

    pub fn sections(&self) -> impl Iterator<Item = NavSection> + '_ {
        self.sections.iter().map(|(section, _)| *section)
    }

    /// Pairs `(a, b)` where visiting `b`'s path would also highlight `a`
    pub fn conflicts(&self) -> Vec<(&'static str, &'static str)> {
        let mut conflicts = Vec::new();
        for (_, a) in self.items() {
            for (_, b) in self.items() {
                if a.path != b.path && a.is_active(b.path) {
                    conflicts.push((a.path, b.path));
                }
            }
        }
        conflicts
    }

    /// Most specific active item: the longest configured path wins
    pub fn active_item(&self, current_path: &str) -> Option<&NavItem> {
        let current = normalize_path(current_path);
        self.items()
            .map(|(_, item)| item)
            .filter(|item| item.is_active(&current))
            .max_by_key(|item| item.path.len())
    }
}

/// Strips query string and fragment, and drops a trailing slash (except on `/`)
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = &raw[..end];
    let trimmed = path.trim_end_matches('/');

    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_exact_policy() {
        assert!(MatchPolicy::Exact.matches("/sales", "/sales"));
        assert!(!MatchPolicy::Exact.matches("/sales/42", "/sales"));
        assert!(!MatchPolicy::Exact.matches("/", "/sales"));
    }

    #[test]
    fn test_prefix_policy_requires_segment_boundary() {
        assert!(MatchPolicy::Prefix.matches("/sales", "/sales"));
        assert!(MatchPolicy::Prefix.matches("/sales/42", "/sales"));
        assert!(!MatchPolicy::Prefix.matches("/salesforce", "/sales"));
        assert!(!MatchPolicy::Prefix.matches("/", "/sales"));
    }

    #[test]
    fn test_nested_path_depends_on_policy() {
        let prefix = NavItem::prefix("Dashboard", "/dashboard", NavIcon::Dashboard);
        let exact = NavItem::exact("Dashboard", "/dashboard", NavIcon::Dashboard);

        assert!(prefix.is_active("/dashboard/ai-insights"));
        assert!(!exact.is_active("/dashboard/ai-insights"));
    }

    #[test]
    fn test_exactly_one_active_for_every_configured_path() {
        let model = NavigationModel::canonical(true);
        for (_, item) in model.items() {
            let active: Vec<_> = model.rows(item.path).into_iter().filter(|r| r.active).collect();
            assert_eq!(active.len(), 1, "path {} highlighted {:?}", item.path, active);
            assert_eq!(active[0].item.path, item.path);
        }
    }

    #[test]
    fn test_canonical_paths_are_unique() {
        let model = NavigationModel::canonical(true);
        let paths: HashSet<_> = model.items().map(|(_, item)| item.path).collect();
        assert_eq!(paths.len(), model.len());
    }

    #[test]
    fn test_unknown_path_highlights_nothing() {
        let model = NavigationModel::default();
        assert!(model.rows("/unknown").iter().all(|row| !row.active));
        assert!(model.active_item("/unknown").is_none());
    }

    #[test]
    fn test_rows_expose_label_and_icon_unmodified() {
        let model = NavigationModel::canonical(false);
        let rows = model.rows("/dashboard");
        assert_eq!(rows.len(), MAIN_NAVIGATION.len() + SECONDARY_NAVIGATION.len());

        let expected = MAIN_NAVIGATION.iter().chain(SECONDARY_NAVIGATION.iter());
        for (row, item) in rows.iter().zip(expected) {
            assert_eq!(row.item.label, item.label);
            assert_eq!(row.item.icon.glyph(), item.icon.glyph());
        }
    }

    #[test]
    fn test_admin_section_is_optional() {
        let without = NavigationModel::canonical(false);
        let with = NavigationModel::canonical(true);

        assert!(!without.sections().any(|s| s == NavSection::Admin));
        assert_eq!(with.len(), without.len() + ADMIN_NAVIGATION.len());
        assert!(without.active_item("/admin/users").is_none());
    }

    #[test]
    fn test_section_rows_only_contain_that_section() {
        let model = NavigationModel::canonical(true);
        let admin = model.section_rows(NavSection::Admin, "/admin/logs/today");

        assert_eq!(admin.len(), ADMIN_NAVIGATION.len());
        assert!(admin.iter().all(|row| row.section == NavSection::Admin));
        assert_eq!(admin.iter().filter(|row| row.active).count(), 1);
    }

    #[test]
    fn test_active_item_prefers_longest_path() {
        static NESTED: &[NavItem] = &[
            NavItem::prefix("Dashboard", "/dashboard", NavIcon::Dashboard),
            NavItem::exact("AI Insights", "/dashboard/ai-insights", NavIcon::AiInsights),
        ];
        let model = NavigationModel::from_sections(vec![(NavSection::Main, NESTED)]);

        let active = model.active_item("/dashboard/ai-insights").map(|i| i.label);
        assert_eq!(active, Some("AI Insights"));
        assert_eq!(model.rows("/dashboard/ai-insights").iter().filter(|r| r.active).count(), 2);
    }

    #[test]
    fn test_conflicts() {
        assert!(NavigationModel::canonical(true).conflicts().is_empty());

        static OVERLAPPING: &[NavItem] = &[
            NavItem::prefix("Dashboard", "/dashboard", NavIcon::Dashboard),
            NavItem::exact("AI Insights", "/dashboard/ai-insights", NavIcon::AiInsights),
        ];
        let model = NavigationModel::from_sections(vec![(NavSection::Main, OVERLAPPING)]);
        assert_eq!(model.conflicts(), vec![("/dashboard", "/dashboard/ai-insights")]);
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/sales/"), "/sales");
        assert_eq!(normalize_path("/sales?page=2"), "/sales");
        assert_eq!(normalize_path("/reports#q3"), "/reports");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("customers"), "/customers");
    }

    #[test]
    fn test_trailing_slash_still_highlights() {
        let model = NavigationModel::default();
        assert_eq!(model.active_item("/analytics/").map(|i| i.label), Some("Analytics"));
    }
}
