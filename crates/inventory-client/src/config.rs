//! # Client Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     INVENTORY_API_URL=http://inventory.local:3001                      │
//! │     INVENTORY_NOTIFICATION_MS=2000                                     │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/inventory/inventory.toml (Linux)                         │
//! │     ~/Library/Application Support/com.inventory.inventory/ (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:3001, 1500 ms                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [api]
//! base_url = "http://localhost:3001"
//!
//! [notifications]
//! display_ms = 1500
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ClientError, ClientResult};

/// Default backend address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Default time a notification stays visible.
pub const DEFAULT_NOTIFICATION_MS: u64 = 1500;

// =============================================================================
// API Settings
// =============================================================================

/// Where the products resource lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL; the client appends `/products`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
        }
    }
}

// =============================================================================
// Notification Settings
// =============================================================================

/// How long notifications stay on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default = "default_display_ms")]
    pub display_ms: u64,
}

fn default_display_ms() -> u64 {
    DEFAULT_NOTIFICATION_MS
}

impl Default for NotificationSettings {
    fn default() -> Self {
        NotificationSettings {
            display_ms: default_display_ms(),
        }
    }
}

// =============================================================================
// Main Client Configuration
// =============================================================================

/// Complete client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub notifications: NotificationSettings,
}

impl ClientConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (inventory.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ClientResult<Self> {
        let config = Self::read(config_path)?;
        config.validate()?;
        Ok(config)
    }

    /// Same layering as [`ClientConfig::load`] without the final validation.
    ///
    /// Callers that apply further overrides must call
    /// [`ClientConfig::validate`] themselves.
    pub fn read(config_path: Option<PathBuf>) -> ClientResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading client config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load client config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ClientResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ClientError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ClientError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| ClientError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Client config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ClientResult<()> {
        self.base_url()?;

        if self.notifications.display_ms == 0 {
            return Err(ClientError::InvalidConfig(
                "notifications.display_ms must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Parses the configured base URL.
    ///
    /// Only `http` and `https` URLs that can carry path segments are accepted.
    pub fn base_url(&self) -> ClientResult<Url> {
        let url = Url::parse(&self.api.base_url)?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "API URL must start with http:// or https://, got: {}",
                self.api.base_url
            )));
        }

        if url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!(
                "API URL cannot be used as a base: {}",
                self.api.base_url
            )));
        }

        Ok(url)
    }

    /// How long a notification stays visible.
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notifications.display_ms)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("INVENTORY_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Ok(ms) = std::env::var("INVENTORY_NOTIFICATION_MS") {
            match ms.parse::<u64>() {
                Ok(ms) => self.notifications.display_ms = ms,
                Err(_) => warn!(value = %ms, "Ignoring invalid INVENTORY_NOTIFICATION_MS"),
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "inventory", "inventory")
            .map(|dirs| dirs.config_dir().join("inventory.toml"))
    }
}
