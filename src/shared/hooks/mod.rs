// Custom Dioxus hooks
pub mod use_overlay;
pub mod use_search;
pub mod use_theme;

pub use use_overlay::{use_overlay, OverlayHandle};
pub use use_search::{use_search, SearchState};
pub use use_theme::{apply_theme, save_theme, use_theme, Theme};
