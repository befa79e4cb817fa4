// ABOUTME: Defines all error types for the enroll library using thiserror.
// ABOUTME: Each submodule has its own error enum, unified under EnrollError.

use crate::params::Violation;

/// Top-level error type for the enroll library.
#[derive(Debug, thiserror::Error)]
pub enum EnrollError {
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    #[error("MCP error: {0}")]
    Mcp(#[from] McpError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from the register_user pipeline.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("{0}")]
    Validation(#[from] ValidationFailed),

    #[error("registration service returned {status} {status_text}")]
    Upstream { status: u16, status_text: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// One or more parameters failed schema validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{} invalid parameter(s){}", .violations.len(), render_violations(.violations))]
pub struct ValidationFailed {
    pub violations: Vec<Violation>,
}

impl ValidationFailed {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Names of the offending fields, in schema order.
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }
}

fn render_violations(violations: &[Violation]) -> String {
    violations.iter().map(|v| format!("\n- {}", v)).collect()
}

/// Errors from the MCP server.
#[derive(Debug, thiserror::Error)]
pub enum McpError {
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(String),

    #[error("{key} is invalid: {message}")]
    Invalid { key: String, message: String },
}
