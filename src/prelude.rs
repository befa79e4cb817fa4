// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use enroll::prelude::*;` to get started quickly.

pub use crate::app::{build_registry, run_stdio};
pub use crate::config::{Config, LogFormat};
pub use crate::error::{ConfigError, EnrollError, McpError, RegistrationError, ValidationFailed};
pub use crate::mcp::{McpRequest, McpResponse, McpServer, McpToolInfo, McpToolResult};
pub use crate::params::{
    Constraint, Format, ParamSpec, ParamType, ParameterSchema, ValidatedRegistration, Violation,
};
pub use crate::registration::{
    CredentialPlacement, RegisterUserTool, Registrar, RegistrationClient, RegistrationConfig,
    RegistrationPayload,
};
pub use crate::tool::{ContentBlock, Registry, Tool, ToolResult};
pub use crate::tools::AddTool;
