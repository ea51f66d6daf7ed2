// Capabilities the chrome consumes but does not implement
// Framework-agnostic, 100% testable

pub mod notifications;
pub mod search;

pub use notifications::{badge_label, NoNotifications, NotificationSource, StaticNotifications};
pub use search::{InertSearch, SearchHandler, SearchOutcome, SearchQuery};

use crate::shared::logging::log_search_submitted;
use std::rc::Rc;

/// Backends handed to the chrome through context
#[derive(Clone)]
pub struct ChromeServices {
    pub search: Rc<dyn SearchHandler>,
    pub notifications: Rc<dyn NotificationSource>,
}

impl Default for ChromeServices {
    fn default() -> Self {
        Self {
            search: Rc::new(InertSearch),
            notifications: Rc::new(NoNotifications),
        }
    }
}

impl ChromeServices {
    pub fn with_search(mut self, search: impl SearchHandler + 'static) -> Self {
        self.search = Rc::new(search);
        self
    }

    pub fn with_notifications(mut self, notifications: impl NotificationSource + 'static) -> Self {
        self.notifications = Rc::new(notifications);
        self
    }

    /// Hands raw input to the search handler; blank input never reaches it
    pub fn submit_search(&self, raw: &str, origin_path: &str) -> Option<SearchOutcome> {
        let query = SearchQuery::new(raw, origin_path)?;
        log_search_submitted(self.search.name(), origin_path, query.text.len());
        Some(self.search.submit(&query))
    }

    /// Text for the header bell badge, if any
    pub fn unread_badge(&self) -> Option<String> {
        badge_label(self.notifications.unread_count())
    }
}

impl PartialEq for ChromeServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.search, &other.search) && Rc::ptr_eq(&self.notifications, &other.notifications)
    }
}

impl std::fmt::Debug for ChromeServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChromeServices")
            .field("search", &self.search.name())
            .field("unread", &self.notifications.unread_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Sends report searches to the reports page, accepts everything else
    #[derive(Default)]
    struct RecordingSearch {
        seen: RefCell<Vec<SearchQuery>>,
    }

    impl SearchHandler for RecordingSearch {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn submit(&self, query: &SearchQuery) -> SearchOutcome {
            self.seen.borrow_mut().push(query.clone());
            if query.text.starts_with("report") {
                SearchOutcome::Navigate("/reports".to_string())
            } else {
                SearchOutcome::Accepted
            }
        }
    }

    #[test]
    fn test_default_services_are_inert() {
        let services = ChromeServices::default();
        assert_eq!(services.submit_search("churn", "/customers"), Some(SearchOutcome::Ignored));
        assert_eq!(services.unread_badge(), None);
    }

    #[test]
    fn test_custom_search_handler_outcomes() {
        let services = ChromeServices::default().with_search(RecordingSearch::default());

        assert_eq!(
            services.submit_search("  reports q3 ", "/dashboard"),
            Some(SearchOutcome::Navigate("/reports".to_string()))
        );
        assert_eq!(services.submit_search("churn", "/customers"), Some(SearchOutcome::Accepted));
    }

    #[test]
    fn test_blank_search_never_reaches_handler() {
        let handler = Rc::new(RecordingSearch::default());
        let services = ChromeServices {
            search: handler.clone(),
            ..ChromeServices::default()
        };

        assert_eq!(services.submit_search("   ", "/dashboard"), None);
        services.submit_search("churn", "/customers");

        let seen = handler.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].text, "churn");
        assert_eq!(seen[0].origin_path, "/customers");
    }

    #[test]
    fn test_notification_source_drives_badge() {
        let services = ChromeServices::default().with_notifications(StaticNotifications(12));
        assert_eq!(services.unread_badge(), Some("9+".to_string()));

        let services = services.with_notifications(StaticNotifications(3));
        assert_eq!(services.unread_badge(), Some("3".to_string()));
    }
}
