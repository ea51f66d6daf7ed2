//! Notification source capability behind the header bell

/// Anything that can report how many notifications are unread
pub trait NotificationSource {
    fn unread_count(&self) -> usize;
}

/// Default source: nothing to show
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNotifications;

impl NotificationSource for NoNotifications {
    fn unread_count(&self) -> usize {
        0
    }
}

/// Fixed count, handy for demos and tests
#[derive(Debug, Clone, Copy)]
pub struct StaticNotifications(pub usize);

impl NotificationSource for StaticNotifications {
    fn unread_count(&self) -> usize {
        self.0
    }
}

/// Text for the unread badge, `None` hides the badge
pub fn badge_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=9 => Some(count.to_string()),
        _ => Some("9+".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_hidden_when_nothing_unread() {
        assert_eq!(badge_label(NoNotifications.unread_count()), None);
    }

    #[test]
    fn test_badge_caps_at_nine() {
        assert_eq!(badge_label(3).as_deref(), Some("3"));
        assert_eq!(badge_label(9).as_deref(), Some("9"));
        assert_eq!(badge_label(StaticNotifications(42).unread_count()).as_deref(), Some("9+"));
    }
}
