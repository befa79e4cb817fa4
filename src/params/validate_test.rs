// ABOUTME: Tests for schema validation - required fields, types, formats,
// ABOUTME: coercion, multi-violation reporting and idempotence.

use serde_json::{Value, json};

use super::*;

fn schema() -> ParameterSchema {
    ParameterSchema::register_user(DEFAULT_LOGO_PLACEHOLDER)
}

fn defaulted(value: Value) -> serde_json::Map<String, Value> {
    apply_defaults(value.as_object().cloned().unwrap(), &schema())
}

fn jane() -> Value {
    json!({
        "username": "Jane Doe",
        "emailid": "jane@example.com",
        "contact_no": "5551234"
    })
}

#[test]
fn test_valid_minimal_input() {
    let reg = validate(&defaulted(jane()), &schema()).unwrap();

    assert_eq!(reg.username(), "Jane Doe");
    assert_eq!(reg.emailid(), "jane@example.com");
    assert_eq!(reg.contact_no(), "5551234");
    assert_eq!(reg.admin_id, 67);
    assert_eq!(reg.set_id, 16);
    assert_eq!(reg.logo, DEFAULT_LOGO_PLACEHOLDER);
}

#[test]
fn test_missing_required_field() {
    let err = validate(
        &defaulted(json!({"username": "Jane Doe", "contact_no": "5551234"})),
        &schema(),
    )
    .unwrap_err();

    assert_eq!(err.fields(), vec!["emailid"]);
    assert_eq!(err.violations[0].constraint, Constraint::Required);
    assert!(err.violations[0].observed.is_none());
}

#[test]
fn test_malformed_email() {
    let mut input = jane();
    input["emailid"] = json!("not-an-email");
    let err = validate(&defaulted(input), &schema()).unwrap_err();

    assert_eq!(err.fields(), vec!["emailid"]);
    assert_eq!(err.violations[0].constraint, Constraint::Format(Format::Email));
    assert_eq!(err.violations[0].observed, Some(json!("not-an-email")));
}

#[test]
fn test_reports_every_violation() {
    let err = validate(
        &defaulted(json!({
            "username": 42,
            "emailid": "jane@",
            "admin_id": "sixty-seven",
            "logo": "not a url"
        })),
        &schema(),
    )
    .unwrap_err();

    assert_eq!(
        err.fields(),
        vec!["username", "emailid", "contact_no", "admin_id", "logo"]
    );
    assert_eq!(err.violations[0].constraint, Constraint::Type(ParamType::String));
    assert_eq!(err.violations[3].constraint, Constraint::Type(ParamType::Integer));
    assert_eq!(err.violations[4].constraint, Constraint::Format(Format::Url));
}

#[test]
fn test_integer_strings_are_coerced() {
    let mut input = jane();
    input["exam_id"] = json!("7");
    let reg = validate(&defaulted(input), &schema()).unwrap();
    assert_eq!(reg.exam_id, 7);
}

#[test]
fn test_fractional_numbers_rejected() {
    let mut input = jane();
    input["set_id"] = json!(1.5);
    let err = validate(&defaulted(input), &schema()).unwrap_err();
    assert_eq!(err.fields(), vec!["set_id"]);
}

#[test]
fn test_integral_floats_are_coerced() {
    let mut input = jane();
    input["admin_id"] = json!(67.0);
    input["set_id"] = json!(21.0);
    let reg = validate(&defaulted(input), &schema()).unwrap();
    assert_eq!(reg.admin_id, 67);
    assert_eq!(reg.set_id, 21);
}

#[test]
fn test_out_of_range_floats_rejected() {
    let mut input = jane();
    input["exam_id"] = json!(1e19);
    let err = validate(&defaulted(input), &schema()).unwrap_err();
    assert_eq!(err.fields(), vec!["exam_id"]);
}

#[test]
fn test_email_shapes() {
    for good in ["jane@example.com", "j.doe+exam@mail.example.co.in"] {
        let mut input = jane();
        input["emailid"] = json!(good);
        assert!(validate(&defaulted(input), &schema()).is_ok(), "{good}");
    }
    for bad in ["jane", "jane@example", "jane doe@example.com", "@example.com", "jane@.com"] {
        let mut input = jane();
        input["emailid"] = json!(bad);
        let err = validate(&defaulted(input), &schema()).unwrap_err();
        assert_eq!(err.fields(), vec!["emailid"], "{bad}");
    }
}

#[test]
fn test_blank_optional_url_is_allowed() {
    let mut input = jane();
    input["logo"] = json!("");
    input["testlink"] = json!("https://exam.example.com/start");
    let reg = validate(&defaulted(input), &schema()).unwrap();

    assert_eq!(reg.logo, "");
    assert_eq!(reg.testlink, "https://exam.example.com/start");
}

#[test]
fn test_relative_url_rejected() {
    let mut input = jane();
    input["reportlink"] = json!("/reports/1");
    let err = validate(&defaulted(input), &schema()).unwrap_err();
    assert_eq!(err.fields(), vec!["reportlink"]);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let mut input = jane();
    input["favourite_color"] = json!("teal");
    assert!(validate(&defaulted(input), &schema()).is_ok());
}

#[test]
fn test_validation_is_idempotent() {
    let first = validate(&defaulted(jane()), &schema()).unwrap();
    let second = validate(&first.to_parameters(), &schema()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_violation_display() {
    let missing = Violation::new("emailid", Constraint::Required, None);
    assert_eq!(
        missing.to_string(),
        "emailid: expected a value (required), but it was missing"
    );

    let bad = Violation::new(
        "emailid",
        Constraint::Format(Format::Email),
        Some(json!("nope")),
    );
    assert_eq!(bad.to_string(), "emailid: expected a valid email address, got \"nope\"");
}

#[test]
fn test_validation_failed_lists_each_violation() {
    let err = validate(
        &defaulted(json!({"username": "Jane Doe", "emailid": "nope"})),
        &schema(),
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "2 invalid parameter(s)\n\
         - emailid: expected a valid email address, got \"nope\"\n\
         - contact_no: expected a value (required), but it was missing"
    );
}
