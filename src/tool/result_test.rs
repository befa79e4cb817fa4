// ABOUTME: Tests for ToolResult - constructors, metadata, defaults.
// ABOUTME: Verifies content blocks serialize with a type tag.

use super::*;

#[test]
fn test_text_result() {
    let result = ToolResult::text("Hello, world!");
    assert_eq!(result.content, vec![ContentBlock::text("Hello, world!")]);
    assert!(!result.is_error);
    assert!(result.metadata.is_empty());
}

#[test]
fn test_error_result() {
    let result = ToolResult::error("Something went wrong");
    assert_eq!(result.text_content(), "Something went wrong");
    assert!(result.is_error);
}

#[test]
fn test_with_metadata() {
    let result = ToolResult::text("output")
        .with_metadata("status", 500)
        .with_metadata("retried", false);

    assert_eq!(result.metadata["status"], 500);
    assert_eq!(result.metadata["retried"], false);
}

#[test]
fn test_default() {
    let result = ToolResult::default();
    assert_eq!(result.text_content(), "");
    assert!(!result.is_error);
}

#[test]
fn test_content_block_wire_shape() {
    let json = serde_json::to_value(ContentBlock::text("hi")).unwrap();
    assert_eq!(json, serde_json::json!({"type": "text", "text": "hi"}));
}

#[test]
fn test_text_content_joins_blocks() {
    let mut result = ToolResult::text("first");
    result.content.push(ContentBlock::text("second"));
    assert_eq!(result.text_content(), "first\nsecond");
}
