// ABOUTME: Tests for RegisterUserTool - the full pipeline against a mock
// ABOUTME: registrar that records payloads and returns canned outcomes.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use super::*;
use crate::error::RegistrationError;
use crate::tool::Tool;

const LOGO: &str = "https://cdn.example.com/blank.png";

/// Registrar that records every payload it receives.
#[derive(Clone)]
struct MockRegistrar {
    calls: Arc<Mutex<Vec<RegistrationPayload>>>,
    outcome: fn() -> Result<Value, RegistrationError>,
}

impl MockRegistrar {
    fn new(outcome: fn() -> Result<Value, RegistrationError>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            outcome,
        }
    }

    fn calls(&self) -> Vec<RegistrationPayload> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Registrar for MockRegistrar {
    async fn register(&self, payload: &RegistrationPayload) -> Result<Value, RegistrationError> {
        self.calls.lock().unwrap().push(payload.clone());
        (self.outcome)()
    }
}

fn accepted() -> Result<Value, RegistrationError> {
    Ok(json!({"id": 42}))
}

fn server_error() -> Result<Value, RegistrationError> {
    Err(RegistrationError::Upstream {
        status: 500,
        status_text: "Internal Server Error".to_string(),
    })
}

fn jane() -> Value {
    json!({
        "username": "Jane Doe",
        "emailid": "jane@example.com",
        "contact_no": "5551234"
    })
}

#[tokio::test]
async fn test_defaults_applied_to_submitted_payload() {
    let registrar = MockRegistrar::new(accepted);
    let tool = RegisterUserTool::new(registrar.clone(), LOGO);

    let result = tool.execute(jane()).await.unwrap();
    assert!(!result.is_error);

    let calls = registrar.calls();
    assert_eq!(calls.len(), 1);
    let payload = &calls[0];
    assert_eq!(payload.user.emailid, "jane@example.com");
    assert_eq!(payload.admin.admin_id, 67);
    assert_eq!(payload.admin.organization_id, 76);
    assert_eq!(payload.admin.superadmin_id, 1);
    assert_eq!(payload.admin.associate_id, 1);
    assert_eq!(payload.exam.exam_id, 2);
    assert_eq!(payload.exam.set_id, 16);
    assert_eq!(payload.oem.header.logo, LOGO);
    assert_eq!(payload.oem.header.name, "");
    assert_eq!(payload.client_id, "");
}

#[tokio::test]
async fn test_missing_email_makes_no_call() {
    let registrar = MockRegistrar::new(accepted);
    let tool = RegisterUserTool::new(registrar.clone(), LOGO);

    let result = tool
        .execute(json!({"username": "Jane Doe", "contact_no": "5551234"}))
        .await
        .unwrap();

    assert!(result.is_error);
    assert!(result.text_content().contains("emailid"));
    assert!(registrar.calls().is_empty());
}

#[tokio::test]
async fn test_malformed_email_cites_format() {
    let registrar = MockRegistrar::new(accepted);
    let tool = RegisterUserTool::new(registrar.clone(), LOGO);

    let mut input = jane();
    input["emailid"] = json!("not-an-email");
    let result = tool.execute(input).await.unwrap();

    assert!(result.is_error);
    assert!(result.text_content().contains("emailid: expected a valid email address"));
    assert!(registrar.calls().is_empty());
}

#[tokio::test]
async fn test_upstream_failure_is_reported_once() {
    let registrar = MockRegistrar::new(server_error);
    let tool = RegisterUserTool::new(registrar.clone(), LOGO);

    let result = tool.execute(jane()).await.unwrap();

    assert!(result.is_error);
    assert!(result.text_content().contains("500"));
    assert_eq!(registrar.calls().len(), 1);
}

#[tokio::test]
async fn test_success_returns_serialized_body() {
    let tool = RegisterUserTool::new(MockRegistrar::new(accepted), LOGO);

    let result = tool.execute(jane()).await.unwrap();

    assert!(!result.is_error);
    assert!(result.text_content().contains("\"id\": 42"));
}

#[tokio::test]
async fn test_wrapped_values_are_accepted() {
    let registrar = MockRegistrar::new(accepted);
    let tool = RegisterUserTool::new(registrar.clone(), LOGO);

    let result = tool
        .execute(json!({
            "username": {"value": "Jane Doe"},
            "emailid": {"value": "jane@example.com"},
            "contact_no": "5551234",
            "exam_id": {"value": 9}
        }))
        .await
        .unwrap();

    assert!(!result.is_error);
    let calls = registrar.calls();
    assert_eq!(calls[0].user.username, "Jane Doe");
    assert_eq!(calls[0].exam.exam_id, 9);
}

#[test]
fn test_prepare_rejects_non_object_arguments() {
    let tool = RegisterUserTool::new(MockRegistrar::new(accepted), LOGO);
    let err = tool.prepare(json!(["Jane Doe"])).unwrap_err();
    assert_eq!(err.fields(), vec!["arguments"]);
}

#[test]
fn test_prepare_treats_null_as_empty() {
    let tool = RegisterUserTool::new(MockRegistrar::new(accepted), LOGO);
    let err = tool.prepare(Value::Null).unwrap_err();
    assert_eq!(err.fields(), vec!["username", "emailid", "contact_no"]);
}

#[test]
fn test_schema_advertises_required_fields() {
    let tool = RegisterUserTool::new(MockRegistrar::new(accepted), LOGO);
    let schema = tool.schema();

    assert_eq!(schema["required"], json!(["username", "emailid", "contact_no"]));
    assert_eq!(schema["properties"]["emailid"]["format"], "email");
    assert_eq!(schema["properties"]["set_id"]["default"], 16);
    assert_eq!(schema["properties"]["logo"]["default"], LOGO);
}
