//! Runtime configuration: API endpoints, credentials and scenario defaults.
//!
//! Defaults are resolved once at startup from the process environment (and an
//! optional `.env` file). Individual clients may override any field through
//! [`DiskConfigOverride`].

use crate::error::ConfigError;
use crate::network::{DEFAULT_BREED_API_URL, DEFAULT_DISK_API_URL};

pub const ENV_DISK_BASE_URL: &str = "YANDEX_DISK_BASE_URL";
pub const ENV_DISK_TOKEN: &str = "YANDEX_DISK_TOKEN";
pub const ENV_BREED_BASE_URL: &str = "DOG_CEO_BASE_URL";
pub const ENV_FOLDER: &str = "E2E_FOLDER";
pub const ENV_UPLOAD_TIMEOUT: &str = "E2E_UPLOAD_TIMEOUT_SECS";

pub const DEFAULT_FOLDER: &str = "test_folder";
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u32 = 20;
pub const DEFAULT_BREEDS: [&str; 3] = ["doberman", "bulldog", "collie"];

// ─── Disk ────────────────────────────────────────────────────────────────────

/// Connection settings for the storage API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskConfig {
    pub base_url: String,
    pub token: String,
}

/// Partial settings layered over a [`DiskConfig`]. `None` keeps the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiskConfigOverride {
    pub base_url: Option<String>,
    pub token: Option<String>,
}

impl DiskConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Apply an override; every field set in `overrides` replaces ours.
    pub fn merged(mut self, overrides: DiskConfigOverride) -> Self {
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(token) = overrides.token {
            self.token = token;
        }
        self
    }
}

// ─── Breed ───────────────────────────────────────────────────────────────────

/// Connection settings for the breed API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedConfig {
    pub base_url: String,
}

impl Default for BreedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BREED_API_URL.to_string(),
        }
    }
}

// ─── Bundle ──────────────────────────────────────────────────────────────────

/// Everything a scenario run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct E2eConfig {
    pub disk: DiskConfig,
    pub breed: BreedConfig,
    pub folder: String,
    pub upload_timeout_secs: u32,
    pub breeds: Vec<String>,
}

impl E2eConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "Ignoring unreadable .env file");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = get(ENV_DISK_TOKEN).ok_or(ConfigError::Missing(ENV_DISK_TOKEN))?;
        let disk = DiskConfig {
            base_url: get(ENV_DISK_BASE_URL).unwrap_or_else(|| DEFAULT_DISK_API_URL.to_string()),
            token,
        };
        let breed = BreedConfig {
            base_url: get(ENV_BREED_BASE_URL)
                .unwrap_or_else(|| DEFAULT_BREED_API_URL.to_string()),
        };

        let upload_timeout_secs = match get(ENV_UPLOAD_TIMEOUT) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: ENV_UPLOAD_TIMEOUT,
                value: raw,
            })?,
            None => DEFAULT_UPLOAD_TIMEOUT_SECS,
        };

        Ok(Self {
            disk,
            breed,
            folder: get(ENV_FOLDER).unwrap_or_else(|| DEFAULT_FOLDER.to_string()),
            upload_timeout_secs,
            breeds: DEFAULT_BREEDS.iter().map(|b| b.to_string()).collect(),
        })
    }
}
