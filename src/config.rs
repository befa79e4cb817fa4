// ABOUTME: Process configuration read from the environment - registration
// ABOUTME: endpoint, credential placement, logo placeholder and logging.

use crate::error::ConfigError;
use crate::params::DEFAULT_LOGO_PLACEHOLDER;
use crate::registration::{CredentialPlacement, RegistrationConfig};

pub const ENV_API_URL: &str = "REGISTER_API_URL";
pub const ENV_API_TOKEN: &str = "REGISTER_API_TOKEN";
pub const ENV_CREDENTIAL_IN: &str = "REGISTER_CREDENTIAL_IN";
pub const ENV_CREDENTIAL_NAME: &str = "REGISTER_CREDENTIAL_NAME";
pub const ENV_LOGO_PLACEHOLDER: &str = "REGISTER_LOGO_PLACEHOLDER";
pub const ENV_LOG: &str = "ENROLL_LOG";
pub const ENV_LOG_FORMAT: &str = "ENROLL_LOG_FORMAT";

const DEFAULT_CREDENTIAL_NAME: &str = "authtoken";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Everything the server needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub registration: RegistrationConfig,
    pub logo_placeholder: String,
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| get(key).ok_or_else(|| ConfigError::Missing(key.to_string()));

        let endpoint = require(ENV_API_URL)?;
        let parsed = url::Url::parse(&endpoint).map_err(|e| ConfigError::Invalid {
            key: ENV_API_URL.to_string(),
            message: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                key: ENV_API_URL.to_string(),
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        let token = require(ENV_API_TOKEN)?;

        let credential_name =
            get(ENV_CREDENTIAL_NAME).unwrap_or_else(|| DEFAULT_CREDENTIAL_NAME.to_string());
        let credential = match get(ENV_CREDENTIAL_IN).as_deref() {
            None | Some("query") => CredentialPlacement::Query {
                name: credential_name,
            },
            Some("header") => CredentialPlacement::Header {
                name: credential_name,
            },
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: ENV_CREDENTIAL_IN.to_string(),
                    message: format!("expected 'query' or 'header', got '{}'", other),
                });
            }
        };

        let log_format = match get(ENV_LOG_FORMAT).as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: ENV_LOG_FORMAT.to_string(),
                    message: format!("expected 'pretty' or 'json', got '{}'", other),
                });
            }
        };

        Ok(Self {
            registration: RegistrationConfig::new(endpoint, token).credential(credential),
            logo_placeholder: get(ENV_LOGO_PLACEHOLDER)
                .unwrap_or_else(|| DEFAULT_LOGO_PLACEHOLDER.to_string()),
            log_filter: get(ENV_LOG).unwrap_or_else(|| "info".to_string()),
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = load(&[
            (ENV_API_URL, "https://api.example.com/register"),
            (ENV_API_TOKEN, "s3cret"),
        ])
        .unwrap();

        assert_eq!(config.registration.endpoint, "https://api.example.com/register");
        assert_eq!(config.registration.token, "s3cret");
        assert_eq!(
            config.registration.credential,
            CredentialPlacement::Query {
                name: "authtoken".to_string()
            }
        );
        assert_eq!(config.logo_placeholder, DEFAULT_LOGO_PLACEHOLDER);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_header_credential() {
        let config = load(&[
            (ENV_API_URL, "https://api.example.com/register"),
            (ENV_API_TOKEN, "s3cret"),
            (ENV_CREDENTIAL_IN, "header"),
            (ENV_CREDENTIAL_NAME, "x-api-key"),
        ])
        .unwrap();

        assert_eq!(
            config.registration.credential,
            CredentialPlacement::Header {
                name: "x-api-key".to_string()
            }
        );
    }

    #[test]
    fn test_missing_token() {
        let err = load(&[(ENV_API_URL, "https://api.example.com/register")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(key) if key == ENV_API_TOKEN));
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let err = load(&[(ENV_API_URL, "  "), (ENV_API_TOKEN, "s3cret")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(key) if key == ENV_API_URL));
    }

    #[test]
    fn test_relative_endpoint_rejected() {
        let err = load(&[(ENV_API_URL, "/register"), (ENV_API_TOKEN, "s3cret")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key, .. } if key == ENV_API_URL));
    }

    #[test]
    fn test_unknown_credential_placement() {
        let err = load(&[
            (ENV_API_URL, "https://api.example.com/register"),
            (ENV_API_TOKEN, "s3cret"),
            (ENV_CREDENTIAL_IN, "cookie"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("cookie"));
    }
}
