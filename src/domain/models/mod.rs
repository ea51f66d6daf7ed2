// Domain models (chrome state and navigation)
// Pure Rust, no framework dependencies

pub mod navigation;
pub mod overlay;

pub use navigation::{
    normalize_path, MatchPolicy, NavIcon, NavItem, NavRow, NavSection, NavigationModel,
    ADMIN_NAVIGATION, MAIN_NAVIGATION, SECONDARY_NAVIGATION,
};
pub use overlay::{OverlayState, OverlayTrigger};
