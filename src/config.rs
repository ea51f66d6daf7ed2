//! Runtime configuration
//!
//! Defaults match the stock deployment; a JSON file named by `DASHBOARD_CONFIG`
//! can override any field, and `PORT` overrides the listening port.

use crate::shared::errors::{AppError, Result};
use serde::{Deserialize, Serialize};
use url::Url;

pub const CONFIG_ENV: &str = "DASHBOARD_CONFIG";
pub const PORT_ENV: &str = "PORT";

/// Signed-in user shown in the sidebar and drawer footers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub role: String,
    /// Must be on an allowed image host to be displayed
    pub avatar_url: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            role: "Admin".to_string(),
            avatar_url: None,
        }
    }
}

impl UserProfile {
    /// Up to two uppercase initials, "?" when the name is blank
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect();

        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub brand_title: String,
    pub brand_subtitle: String,
    /// First breadcrumb segment in the header
    pub breadcrumb_root: String,
    /// Hosts external images (avatars) may be loaded from
    pub image_domains: Vec<String>,
    pub minify: bool,
    pub strict_mode: bool,
    pub show_admin_section: bool,
    pub user: UserProfile,
    /// Listening port of the standalone `server` binary. The fullstack entry
    /// binds wherever the dioxus CLI tells it to and ignores this field.
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand_title: "AI Business".to_string(),
            brand_subtitle: "Intelligent Platform".to_string(),
            breadcrumb_root: "AI Business Platform".to_string(),
            image_domains: vec!["api.dicebear.com".to_string()],
            minify: true,
            strict_mode: true,
            show_admin_section: true,
            user: UserProfile::default(),
            port: 8080,
        }
    }
}

/// Subset of the configuration that is safe to expose over HTTP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicConfig {
    pub brand_title: String,
    pub brand_subtitle: String,
    pub image_domains: Vec<String>,
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for domain in &self.image_domains {
            let valid = !domain.is_empty()
                && !domain.contains("://")
                && !domain.contains('/')
                && !domain.chars().any(char::is_whitespace);
            if !valid {
                return Err(AppError::InvalidImageHost(domain.clone()));
            }
        }
        if self.brand_title.trim().is_empty() {
            return Err(AppError::Config("brand_title must not be empty".to_string()));
        }
        Ok(())
    }

    /// Only https URLs on an allowed host may be used as image sources.
    /// Credentials in the authority are refused outright.
    pub fn is_image_allowed(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        if parsed.scheme() != "https" || !parsed.username().is_empty() || parsed.password().is_some() {
            return false;
        }
        let Some(host) = parsed.host_str() else {
            return false;
        };

        self.image_domains
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(host))
    }

    /// Avatar URL for the configured user, if it passes the allow-list
    pub fn allowed_avatar(&self) -> Option<&str> {
        self.user
            .avatar_url
            .as_deref()
            .filter(|url| self.is_image_allowed(url))
    }

    pub fn public(&self) -> PublicConfig {
        PublicConfig {
            brand_title: self.brand_title.clone(),
            brand_subtitle: self.brand_subtitle.clone(),
            image_domains: self.image_domains.clone(),
        }
    }

    /// Reads `DASHBOARD_CONFIG` (if set) and applies `PORT`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)?;
                let config = Self::from_json(&raw)?;
                crate::shared::logging::log_config_loaded(&path, config.image_domains.len());
                config
            }
            Err(_) => Self::default(),
        };

        if let Ok(port) = std::env::var(PORT_ENV) {
            config.port = port
                .parse()
                .map_err(|_| AppError::Config(format!("invalid {}: {}", PORT_ENV, port)))?;
        }

        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            crate::shared::logging::log_config_error(CONFIG_ENV, &e.to_string());
            Self::default()
        })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load_or_default() -> Self {
        Self::default()
    }
}
