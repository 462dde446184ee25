//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::catalog::{default_actions, default_shortcuts, ActionItem, Shortcut};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default = "default_actions")]
    pub actions: Vec<ActionItem>,

    #[serde(default = "default_shortcuts")]
    pub shortcuts: Vec<Shortcut>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Home view configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Name shown in the greeting
    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// Where the frontend fetches its dashboard data
    #[serde(default = "default_data_url")]
    pub data_url: String,

    /// Placeholder text in the AI ask box
    #[serde(default = "default_ask_placeholder")]
    pub ask_placeholder: String,
}

fn default_user_name() -> String {
    "there".to_string()
}

fn default_data_url() -> String {
    "/data/dashboard.json".to_string()
}

fn default_ask_placeholder() -> String {
    "Ask about your pipeline, orders, or products...".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            user_name: default_user_name(),
            data_url: default_data_url(),
            ask_placeholder: default_ask_placeholder(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        // Try default config locations
        let config_paths = [
            dirs::config_dir().map(|p| p.join("dealer-home").join("config.toml")),
            Some(PathBuf::from("./dealer-home.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (the environment in production)
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Dashboard overrides
        if let Some(user) = lookup("DEALER_HOME_USER") {
            self.dashboard.user_name = user;
        }
        if let Some(url) = lookup("DEALER_HOME_DATA_URL") {
            self.dashboard.data_url = url;
        }

        // Logging overrides
        if let Some(level) = lookup("DEALER_HOME_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("DEALER_HOME_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dashboard: DashboardConfig::default(),
            actions: default_actions(),
            shortcuts: default_shortcuts(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Dealer Home Configuration
#
# Environment variables override these settings:
# - DEALER_HOME_USER
# - DEALER_HOME_DATA_URL
# - DEALER_HOME_LOG_LEVEL
# - DEALER_HOME_LOG_FORMAT

[dashboard]
# Name shown in the header greeting
user_name = "there"

# URL the frontend loads dashboard data from
data_url = "/data/dashboard.json"

# Placeholder text in the AI ask box
ask_placeholder = "Ask about your pipeline, orders, or products..."

# Action list. Omit every [[actions]] table to use the built-in list.
[[actions]]
id = "follow-up-lakeside"
title = "Follow up with Lakeside Interiors"
subtitle = "Quote sent 3 days ago"
category = "Follow-up"
icon = "phone"
route = "tasks"

[[actions]]
id = "quote-harbor"
title = "Finalize quote for Harbor Design Group"
subtitle = "Due Friday"
category = "Quote"
icon = "file-text"
route = "sales"

# Quick-access grid. Omit every [[shortcuts]] table to use the built-in list.
[[shortcuts]]
id = "new-lead"
label = "New Lead"
icon = "user-plus"
route = "new-lead"

[[shortcuts]]
id = "dealer-directory"
label = "Dealer Directory"
icon = "book-open"
route = "resources/dealer-directory"

[[shortcuts]]
id = "samples"
label = "Samples"
icon = "palette"
route = "samples"

[[shortcuts]]
id = "products"
label = "Products"
icon = "grid"
route = "products"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
