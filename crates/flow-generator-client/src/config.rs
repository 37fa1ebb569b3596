// crates/flow-generator-client/src/config.rs
// ============================================================================
// Module: Flow Generator Configuration
// Description: Configuration model and resolution for the flow generator client.
// Purpose: Resolve the service endpoint once, before the client is built.
// Dependencies: reqwest, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is an explicit value handed to
//! [`crate::FlowGeneratorClient::new`]. Bootstrap code resolves it from a TOML
//! file, the process environment, or both; the client itself never reads the
//! environment. An explicit base URL override always beats the default.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;

use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default service root when no override is supplied.
pub const DEFAULT_SERVICE_URL: &str = "http://flow-generator";
/// Environment variable overriding the service root.
pub const SERVICE_URL_ENV_VAR: &str = "FLOW_GENERATION_URL";
/// Versioned path of the prediction endpoint.
pub const PREDICT_PATH: &str = "/v1/predict";
/// Default maximum response body size in bytes.
const DEFAULT_MAX_RESPONSE_BYTES: usize = 1024 * 1024;
/// Maximum configuration file size in bytes.
const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Configuration for the flow generator client.
///
/// # Invariants
/// - `service_base_url` is used verbatim as the endpoint root.
/// - `accept_invalid_certs = true` disables TLS certificate verification.
/// - `max_response_bytes` is a hard upper bound on response bodies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlowGeneratorConfig {
    /// Root URL of the flow generation service.
    pub service_base_url: String,
    /// Skip certificate verification for the pre-trusted internal service.
    pub accept_invalid_certs: bool,
    /// Maximum response size allowed, in bytes.
    pub max_response_bytes: usize,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl Default for FlowGeneratorConfig {
    fn default() -> Self {
        Self {
            service_base_url: DEFAULT_SERVICE_URL.to_string(),
            accept_invalid_certs: true,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
            user_agent: "flow-generator-client/0.1".to_string(),
        }
    }
}

impl FlowGeneratorConfig {
    /// Builds a default configuration with the service URL taken from the
    /// process environment when set.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a default configuration, resolving the service URL override
    /// through `lookup`.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().with_service_url_override(lookup(SERVICE_URL_ENV_VAR))
    }

    /// Loads configuration from a TOML file and applies the environment
    /// override on top.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, parsed, or
    /// validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_lookup(path, |key| env::var(key).ok())
    }

    /// Loads configuration from a TOML file, resolving the service URL
    /// override through `lookup`.
    ///
    /// The override replaces the file value before validation, so a stale
    /// file entry never blocks a valid override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, parsed, or
    /// validated.
    pub fn load_with_lookup<F>(path: &Path, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config = parse_toml(content)?.with_service_url_override(lookup(SERVICE_URL_ENV_VAR));
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config = parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the service URL when an override is present.
    #[must_use]
    pub fn with_service_url_override(mut self, service_url: Option<String>) -> Self {
        if let Some(service_url) = service_url {
            self.service_base_url = service_url;
        }
        self
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("service_base_url must be non-empty".to_string()));
        }
        if self.max_response_bytes == 0 {
            return Err(ConfigError::Invalid("max_response_bytes must be non-zero".to_string()));
        }
        let url = self.predict_url()?;
        match url.scheme() {
            "http" | "https" => {}
            _ => {
                return Err(ConfigError::Invalid(
                    "service_base_url must use http or https".to_string(),
                ));
            }
        }
        if !url.username().is_empty() || url.password().is_some() {
            return Err(ConfigError::Invalid(
                "service_base_url must not embed credentials".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the prediction endpoint URL for the configured service root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the resulting URL does not parse.
    pub fn predict_url(&self) -> Result<Url, ConfigError> {
        let raw = format!("{}{PREDICT_PATH}", self.service_base_url);
        Url::parse(&raw)
            .map_err(|err| ConfigError::Invalid(format!("invalid service_base_url: {err}")))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses TOML text without validating it.
fn parse_toml(content: &str) -> Result<FlowGeneratorConfig, ConfigError> {
    toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}
