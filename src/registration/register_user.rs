// ABOUTME: RegisterUserTool - the register_user tool. Normalizes, defaults
// ABOUTME: and validates arguments, then submits the assembled payload.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{Registrar, RegistrationPayload, format_outcome};
use crate::error::{RegistrationError, ValidationFailed};
use crate::params::{Constraint, ParameterSchema, Violation, apply_defaults, normalize, validate};
use crate::tool::{Tool, ToolResult};

/// Tool that registers an end user with the exam registration service.
pub struct RegisterUserTool {
    schema: ParameterSchema,
    registrar: Arc<dyn Registrar>,
}

impl RegisterUserTool {
    /// Create the tool. `logo_placeholder` is the logo used when the caller
    /// does not brand the exam.
    pub fn new(registrar: impl Registrar + 'static, logo_placeholder: impl Into<String>) -> Self {
        Self::with_registrar(Arc::new(registrar), logo_placeholder)
    }

    /// Create the tool around a shared registrar.
    pub fn with_registrar(registrar: Arc<dyn Registrar>, logo_placeholder: impl Into<String>) -> Self {
        Self {
            schema: ParameterSchema::register_user(logo_placeholder),
            registrar,
        }
    }

    pub fn parameter_schema(&self) -> &ParameterSchema {
        &self.schema
    }

    /// Run the synchronous half of the pipeline: unwrap, default, validate
    /// and assemble. No network traffic happens here.
    pub fn prepare(&self, params: Value) -> Result<RegistrationPayload, ValidationFailed> {
        let raw = match params {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(ValidationFailed::new(vec![Violation::new(
                    "arguments",
                    Constraint::Object,
                    Some(other),
                )]));
            }
        };

        let normalized = normalize(raw);
        let defaulted = apply_defaults(normalized, &self.schema);
        let registration = validate(&defaulted, &self.schema)?;
        Ok(RegistrationPayload::from(registration))
    }

    /// Run the whole pipeline and return the service's response body.
    pub async fn run(&self, params: Value) -> Result<Value, RegistrationError> {
        let payload = self.prepare(params).inspect_err(|failed| {
            tracing::warn!(fields = ?failed.fields(), "register_user arguments rejected");
        })?;
        self.registrar.register(&payload).await
    }
}

#[async_trait]
impl Tool for RegisterUserTool {
    fn name(&self) -> &str {
        "register_user"
    }

    fn description(&self) -> &str {
        "Register a user for an exam. Only username, emailid and contact_no are required; \
         admin, exam and branding fields fall back to deployment defaults."
    }

    fn schema(&self) -> Value {
        self.schema.to_json_schema()
    }

    async fn execute(&self, params: Value) -> Result<ToolResult, anyhow::Error> {
        Ok(format_outcome(self.run(params).await))
    }
}
