//! Plugin configuration: the optional `base_url` and the policy for
//! root-relative image URLs when no base is set.
//!
//! Configuration is read once, either from an object the host hands over
//! ([`HostConfig`]) or from a `config.json` next to the plugin
//! ([`JsonFile`]). A missing or broken source is never fatal; it simply
//! leaves the plugin unconfigured.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

pub const CONFIG_FILE_NAME: &str = "config.json";

// ── Error type ───────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid plugin configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

// ── Settings ─────────────────────────────────────────────────────────────────

/// What to do with `/path` image URLs when `base_url` is unconfigured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeUrlPolicy {
    /// Leave the whole reply untouched.
    #[default]
    Suppress,
    /// Rewrite anyway and forward the relative URL as is.
    PassThrough,
}

/// Raw settings as they appear in a configuration source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: Option<String>,
    pub relative_url_policy: RelativeUrlPolicy,
}

// ── Sources ──────────────────────────────────────────────────────────────────

/// Somewhere settings can be loaded from.
pub trait SettingsSource {
    fn read(&self) -> Result<Settings, ConfigError>;
}

/// Configuration object supplied by the host framework.
#[derive(Debug, Clone, Default)]
pub struct HostConfig(pub Value);

impl SettingsSource for HostConfig {
    fn read(&self) -> Result<Settings, ConfigError> {
        if self.0.is_null() {
            return Ok(Settings::default());
        }
        Ok(Settings::deserialize(&self.0)?)
    }
}

/// JSON file, usually `config.json` in the plugin directory.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `config.json` inside `dir`.
    pub fn beside(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(CONFIG_FILE_NAME))
    }
}

impl SettingsSource for JsonFile {
    fn read(&self) -> Result<Settings, ConfigError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

// ── Resolved configuration ───────────────────────────────────────────────────

/// Immutable configuration snapshot used for every reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyConfig {
    base_url: Option<String>,
    relative_url_policy: RelativeUrlPolicy,
}

impl ReplyConfig {
    pub fn new(base_url: Option<&str>) -> Self {
        Self {
            base_url: base_url.and_then(normalize_base_url),
            relative_url_policy: RelativeUrlPolicy::default(),
        }
    }

    pub fn with_relative_url_policy(mut self, policy: RelativeUrlPolicy) -> Self {
        self.relative_url_policy = policy;
        self
    }

    /// Load from `source`, falling back to the unconfigured default on any
    /// error.
    pub fn from_source(source: &dyn SettingsSource) -> Self {
        match source.read() {
            Ok(settings) => Self::from(settings),
            Err(e) => {
                tracing::warn!("plugin configuration unavailable, base_url disabled: {}", e);
                Self::default()
            }
        }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn relative_url_policy(&self) -> RelativeUrlPolicy {
        self.relative_url_policy
    }
}

impl From<Settings> for ReplyConfig {
    fn from(settings: Settings) -> Self {
        Self {
            base_url: settings.base_url.as_deref().and_then(normalize_base_url),
            relative_url_policy: settings.relative_url_policy,
        }
    }
}

// ── Normalization ────────────────────────────────────────────────────────────

/// Trim, strip trailing slashes and reject anything that is not an absolute
/// http(s) URL. Empty means unconfigured.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    match Url::parse(trimmed) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => {
            Some(trimmed.to_string())
        }
        Ok(parsed) => {
            tracing::warn!(
                "ignoring base_url {:?}: unsupported scheme {:?}",
                trimmed,
                parsed.scheme()
            );
            None
        }
        Err(e) => {
            tracing::warn!("ignoring base_url {:?}: {}", trimmed, e);
            None
        }
    }
}
