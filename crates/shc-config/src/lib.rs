//! Shared configuration for smart-home controller tools.
//!
//! TOML profiles merged with `SHC_*` environment variables, and translation
//! to `shc_api::EndpointConfig`. The CLI layers its flag overrides on top.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shc_api::{DEFAULT_API_VERSION, DEFAULT_PORT, EndpointConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found (available: {available})")]
    ProfileNotFound { name: String, available: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when none is named on the command line.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named controller profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    #[serde(default)]
    pub validate_certificate: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            api_version: default_api_version(),
            validate_certificate: false,
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_api_version() -> String {
    DEFAULT_API_VERSION.into()
}

/// A named controller profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    /// Controller host name or IP address.
    pub address: String,

    /// REST API port (defaults to 8444).
    pub port: Option<u16>,

    /// Override the `api-version` header.
    pub api_version: Option<String>,

    /// Override certificate validation.
    pub validate_certificate: Option<bool>,

    /// Path to a PEM CA certificate for the controller.
    pub ca_cert: Option<PathBuf>,
}

impl Config {
    /// Look up a profile by name.
    pub fn profile(&self, name: &str) -> Result<&Profile, ConfigError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::ProfileNotFound {
                name: name.into(),
                available: if self.profiles.is_empty() {
                    "none".into()
                } else {
                    self.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
                },
            })
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "shc", "shc").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("shc");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file. A missing file yields the defaults.
///
/// `SHC_`-prefixed variables override file values; `__` separates nesting
/// levels (`SHC_DEFAULTS__OUTPUT=json`).
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SHC_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist or is invalid.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Render a config as the TOML that would load back into it.
pub fn render_config(cfg: &Config) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(cfg)?)
}

// ── Translation ─────────────────────────────────────────────────────

/// Build an `EndpointConfig` from a profile, falling back to `defaults`.
pub fn profile_to_endpoint(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<EndpointConfig, ConfigError> {
    let address = profile.address.trim();
    if address.is_empty() {
        return Err(ConfigError::Validation {
            field: "address".into(),
            reason: "must not be empty".into(),
        });
    }

    let mut endpoint = EndpointConfig::new(address)
        .with_port(profile.port.unwrap_or(DEFAULT_PORT))
        .with_api_version(
            profile
                .api_version
                .clone()
                .unwrap_or_else(|| defaults.api_version.clone()),
        )
        .with_certificate_validation(
            profile
                .validate_certificate
                .unwrap_or(defaults.validate_certificate),
        );
    if let Some(ref ca) = profile.ca_cert {
        endpoint = endpoint.with_ca_cert(ca.clone());
    }

    Ok(endpoint.normalized())
}
