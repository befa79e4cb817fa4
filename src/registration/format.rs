// ABOUTME: Result formatting - turns a registration outcome into the text
// ABOUTME: block returned to the RPC caller. Never fails.

use crate::error::RegistrationError;
use crate::tool::ToolResult;

/// Render the outcome of a registration attempt.
pub fn format_outcome(outcome: Result<serde_json::Value, RegistrationError>) -> ToolResult {
    match outcome {
        Ok(payload) => {
            let body = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string());
            ToolResult::text(format!("User registration successful: {}", body))
        }
        Err(RegistrationError::Validation(failed)) => {
            let mut text = String::from("User registration failed: invalid input");
            for violation in &failed.violations {
                text.push_str("\n- ");
                text.push_str(&violation.to_string());
            }
            ToolResult::error(text).with_metadata("invalid_fields", failed.fields())
        }
        Err(RegistrationError::Upstream {
            status,
            status_text,
        }) => ToolResult::error(format!(
            "User registration failed: registration service returned HTTP {} {}",
            status, status_text
        ))
        .with_metadata("status", status),
        Err(other) => ToolResult::error(format!(
            "User registration failed: unexpected error: {}",
            other
        )),
    }
}
