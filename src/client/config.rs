//! Client configuration.
//!
//! Built once at startup and handed to the gateway and the lifecycle model, so
//! every collaborator sees the mode it was constructed with.

use std::str::FromStr;

use url::Url;

use crate::client::{
    constant::{DEFAULT_API_URL, DEFAULT_PROXMOX_URL},
    model::error::ConfigError,
};

const KEY_API_MODE: &str = "PANEL_API_MODE";
const KEY_API_URL: &str = "PANEL_API_URL";
const KEY_PROXMOX_URL: &str = "PANEL_PROXMOX_URL";
const KEY_LIFECYCLE_MODE: &str = "PANEL_LIFECYCLE_MODE";

/// Which backend the gateway talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiMode {
    /// The remote management API over HTTP.
    Live,
    /// The simulated backend persisted in local storage.
    Mock,
}

impl FromStr for ApiMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "mock" => Ok(Self::Mock),
            _ => Err("expected `live` or `mock`".to_string()),
        }
    }
}

/// How a lifecycle action is reflected in the view's server list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionMode {
    /// Re-read the collection after the request to get the real status.
    Refresh,
    /// Set the intended status locally without waiting for confirmation.
    Optimistic,
}

impl FromStr for TransitionMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "refresh" => Ok(Self::Refresh),
            "optimistic" => Ok(Self::Optimistic),
            _ => Err("expected `refresh` or `optimistic`".to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_mode: ApiMode,
    /// Base URL of the management API, without trailing slash.
    pub api_url: String,
    /// Base URL of the hypervisor-proxy API, without trailing slash.
    pub proxmox_url: String,
    pub transition_mode: TransitionMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_mode: ApiMode::Mock,
            api_url: DEFAULT_API_URL.to_string(),
            proxmox_url: DEFAULT_PROXMOX_URL.to_string(),
            transition_mode: TransitionMode::Optimistic,
        }
    }
}

impl Config {
    /// Reads configuration from the process environment, falling back to values
    /// baked in at build time (the only source available inside a browser).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| build_time_value(key)))
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Every key is optional. When `PANEL_LIFECYCLE_MODE` is absent it follows the
    /// API mode: optimistic without a backend, refresh against a live one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_mode = match lookup(KEY_API_MODE) {
            Some(value) => parse_value(KEY_API_MODE, &value)?,
            None => ApiMode::Mock,
        };

        let api_url = base_url(KEY_API_URL, lookup(KEY_API_URL), DEFAULT_API_URL)?;
        let proxmox_url = base_url(KEY_PROXMOX_URL, lookup(KEY_PROXMOX_URL), DEFAULT_PROXMOX_URL)?;

        let transition_mode = match lookup(KEY_LIFECYCLE_MODE) {
            Some(value) => parse_value(KEY_LIFECYCLE_MODE, &value)?,
            None => match api_mode {
                ApiMode::Live => TransitionMode::Refresh,
                ApiMode::Mock => TransitionMode::Optimistic,
            },
        };

        Ok(Self {
            api_mode,
            api_url,
            proxmox_url,
            transition_mode,
        })
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr<Err = String>,
{
    value.parse().map_err(|reason| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason,
    })
}

fn base_url(key: &str, value: Option<String>, default: &str) -> Result<String, ConfigError> {
    let value = value.unwrap_or_else(|| default.to_string());

    let url = Url::parse(&value).map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.clone(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value,
            reason: "scheme must be http or https".to_string(),
        });
    }

    Ok(value.trim_end_matches('/').to_string())
}

fn build_time_value(key: &str) -> Option<String> {
    let value = match key {
        KEY_API_MODE => option_env!("PANEL_API_MODE"),
        KEY_API_URL => option_env!("PANEL_API_URL"),
        KEY_PROXMOX_URL => option_env!("PANEL_PROXMOX_URL"),
        KEY_LIFECYCLE_MODE => option_env!("PANEL_LIFECYCLE_MODE"),
        _ => None,
    };
    value.map(str::to_string)
}
