use dioxus::prelude::*;
use std::str::FromStr;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "theme";

/// Light/dark palette applied as a class on the document element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Theme signal, restored from localStorage (or the OS preference) on mount
pub fn use_theme() -> Signal<Theme> {
    let mut theme = use_signal(Theme::default);

    use_effect(move || {
        if let Some(saved) = load_theme() {
            theme.set(saved);
            apply_theme(saved);
        }
    });

    theme
}

#[cfg(target_arch = "wasm32")]
fn load_theme() -> Option<Theme> {
    let window = web_sys::window()?;

    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .and_then(|value| value.parse::<Theme>().ok());

    stored.or_else(|| {
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|query| query.matches());
        prefers_dark.then_some(Theme::Dark)
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn load_theme() -> Option<Theme> {
    None
}

/// Swap the theme class on `<html>`
#[cfg(target_arch = "wasm32")]
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let _ = classes.remove_2(Theme::Light.as_str(), Theme::Dark.as_str());
    let _ = classes.add_1(theme.as_str());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme(_theme: Theme) {
    // No-op on server
}

#[cfg(target_arch = "wasm32")]
pub fn save_theme(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_theme(_theme: Theme) {
    // No-op on server
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trips_through_str() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        }
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
