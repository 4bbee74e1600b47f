//! User settings for expense-sync
//!
//! Manages the remote document store location and credential, display
//! preferences, and the connectivity re-check interval.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Environment variable overriding the remote API base URL
pub const API_URL_ENV: &str = "EXPENSE_SYNC_API_URL";
/// Environment variable overriding the remote document id
pub const DOCUMENT_ID_ENV: &str = "EXPENSE_SYNC_DOCUMENT_ID";
/// Environment variable overriding the remote credential
pub const MASTER_KEY_ENV: &str = "EXPENSE_SYNC_MASTER_KEY";

/// Where and how to reach the shared remote document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSettings {
    /// Base URL of the document API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Identifier of the single shared document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,

    /// Name of the header carrying the static credential
    #[serde(default = "default_credential_header")]
    pub credential_header: String,

    /// Static credential sent with every remote call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_key: Option<String>,
}

fn default_api_url() -> String {
    "https://api.jsonbin.io/v3/b".to_string()
}

fn default_credential_header() -> String {
    "X-Master-Key".to_string()
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            document_id: None,
            credential_header: default_credential_header(),
            master_key: None,
        }
    }
}

impl RemoteSettings {
    /// The remote is usable only with both a document id and a credential
    pub fn is_configured(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.document_id) && present(&self.master_key)
    }
}

/// User settings for expense-sync
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Remote document store
    #[serde(default)]
    pub remote: RemoteSettings,

    /// Prefix used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// How many expenses `recent` shows by default
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Seconds between background connectivity checks
    #[serde(default = "default_status_interval")]
    pub status_interval_secs: u64,
}

fn default_currency() -> String {
    "RS. ".to_string()
}

fn default_recent_limit() -> usize {
    5
}

fn default_status_interval() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            remote: RemoteSettings::default(),
            currency_symbol: default_currency(),
            recent_limit: default_recent_limit(),
            status_interval_secs: default_status_interval(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    ///
    /// Environment overrides are applied on top of whatever was loaded.
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings = Self::load_stored(paths)?;
        Ok(settings.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Settings as written in the settings file, without environment overrides
    pub fn load_stored(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })
        } else {
            Ok(Settings::default())
        }
    }

    /// Apply remote overrides from an environment lookup
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV) {
            self.remote.api_url = url;
        }
        if let Some(id) = lookup(DOCUMENT_ID_ENV) {
            self.remote.document_id = Some(id);
        }
        if let Some(key) = lookup(MASTER_KEY_ENV) {
            self.remote.master_key = Some(key);
        }
        self
    }

    /// Interval for the background connectivity monitor
    pub fn status_interval(&self) -> Duration {
        Duration::from_secs(self.status_interval_secs.max(1))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            ExpenseError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
