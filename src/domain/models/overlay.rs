use serde::{Deserialize, Serialize};

/// Mobile navigation drawer state, owned by the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// Everything that can move the drawer between its two states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayTrigger {
    /// Hamburger button in the header
    MenuButton,
    CloseButton,
    Backdrop,
    /// Any navigation entry picked inside the drawer
    NavigationSelected,
}

impl OverlayTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayTrigger::MenuButton => "menu_button",
            OverlayTrigger::CloseButton => "close_button",
            OverlayTrigger::Backdrop => "backdrop",
            OverlayTrigger::NavigationSelected => "navigation_selected",
        }
    }

    pub fn opens(&self) -> bool {
        matches!(self, OverlayTrigger::MenuButton)
    }
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        matches!(self, OverlayState::Open)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayState::Closed => "closed",
            OverlayState::Open => "open",
        }
    }

    /// Both directions are idempotent
    pub fn apply(self, trigger: OverlayTrigger) -> OverlayState {
        if trigger.opens() {
            OverlayState::Open
        } else {
            OverlayState::Closed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOSERS: [OverlayTrigger; 3] = [
        OverlayTrigger::CloseButton,
        OverlayTrigger::Backdrop,
        OverlayTrigger::NavigationSelected,
    ];

    #[test]
    fn test_starts_closed() {
        assert_eq!(OverlayState::default(), OverlayState::Closed);
        assert!(!OverlayState::default().is_open());
    }

    #[test]
    fn test_menu_button_opens_from_any_state() {
        for state in [OverlayState::Closed, OverlayState::Open] {
            assert_eq!(state.apply(OverlayTrigger::MenuButton), OverlayState::Open);
        }
    }

    #[test]
    fn test_every_close_trigger_closes() {
        for trigger in CLOSERS {
            assert_eq!(OverlayState::Open.apply(trigger), OverlayState::Closed, "{:?}", trigger);
            assert_eq!(OverlayState::Closed.apply(trigger), OverlayState::Closed);
        }
    }

    #[test]
    fn test_open_is_idempotent() {
        let state = OverlayState::Closed
            .apply(OverlayTrigger::MenuButton)
            .apply(OverlayTrigger::MenuButton);
        assert!(state.is_open());
    }

    #[test]
    fn test_trigger_names() {
        assert_eq!(OverlayTrigger::Backdrop.as_str(), "backdrop");
        assert_eq!(OverlayTrigger::NavigationSelected.as_str(), "navigation_selected");
    }
}
