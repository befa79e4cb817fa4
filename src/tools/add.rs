// ABOUTME: AddTool - adds two numbers.
// ABOUTME: Accepts plain or wrapped numeric arguments.

use async_trait::async_trait;
use serde::Deserialize;

use crate::params::normalize;
use crate::tool::{Tool, ToolResult};

/// Tool that returns the sum of `a` and `b`.
pub struct AddTool;

#[async_trait]
impl Tool for AddTool {
    fn name(&self) -> &str {
        "add"
    }

    fn description(&self) -> &str {
        "Add two numbers and return the sum."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "a": { "type": "number", "description": "First addend" },
                "b": { "type": "number", "description": "Second addend" }
            },
            "required": ["a", "b"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            a: f64,
            b: f64,
        }

        let params = match params {
            serde_json::Value::Object(map) => serde_json::Value::Object(normalize(map)),
            other => other,
        };
        let params: Params = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => return Ok(ToolResult::error(format!("Invalid arguments: {}", e))),
        };

        let sum = params.a + params.b;
        Ok(ToolResult::text(sum.to_string()))
    }
}
