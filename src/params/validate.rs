// ABOUTME: Schema validation - checks a defaulted parameter map against the
// ABOUTME: ParameterSchema and produces a typed ValidatedRegistration.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Format, ParamSpec, ParamType, ParameterSchema};
use crate::error::ValidationFailed;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email regex is valid")
});

/// The rule a parameter broke.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Required,
    Type(ParamType),
    Format(Format),
    /// The argument bag itself was not an object.
    Object,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Required => f.write_str("a value (required)"),
            Constraint::Type(ty) => write!(f, "type {}", ty),
            Constraint::Format(format) => write!(f, "a valid {}", format),
            Constraint::Object => f.write_str("an object"),
        }
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub field: String,
    pub constraint: Constraint,
    /// What was actually received; `None` when the field was absent.
    pub observed: Option<Value>,
}

impl Violation {
    pub fn new(field: impl Into<String>, constraint: Constraint, observed: Option<Value>) -> Self {
        Self {
            field: field.into(),
            constraint,
            observed,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: expected {}, ", self.field, self.constraint)?;
        match &self.observed {
            Some(value) => write!(f, "got {}", value),
            None => f.write_str("but it was missing"),
        }
    }
}

/// A registration request that satisfies the register_user schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedRegistration {
    pub(crate) username: String,
    pub(crate) emailid: String,
    pub(crate) contact_no: String,
    pub(crate) admin_id: i64,
    pub(crate) organization_id: i64,
    pub(crate) superadmin_id: i64,
    pub(crate) associate_id: i64,
    pub(crate) exam_id: i64,
    pub(crate) set_id: i64,
    pub(crate) logo: String,
    pub(crate) name: String,
    pub(crate) primary: String,
    pub(crate) background: String,
    pub(crate) cta: String,
    pub(crate) cta_text_color: String,
    pub(crate) cta_text: String,
    pub(crate) copyright_text: String,
    pub(crate) test_name: String,
    pub(crate) backtodashboard: String,
    pub(crate) testlink: String,
    pub(crate) reportlink: String,
    pub(crate) client_id: String,
    pub(crate) client_log: String,
}

impl ValidatedRegistration {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn emailid(&self) -> &str {
        &self.emailid
    }

    pub fn contact_no(&self) -> &str {
        &self.contact_no
    }

    /// Flatten back into a parameter map, e.g. to re-validate.
    pub fn to_parameters(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Validate every field in one pass, reporting all violations found.
pub fn validate(
    params: &Map<String, Value>,
    schema: &ParameterSchema,
) -> Result<ValidatedRegistration, ValidationFailed> {
    let mut violations = Vec::new();
    let mut typed = Map::new();

    for param in schema.params() {
        match check_field(param, params.get(param.name)) {
            Ok(value) => {
                typed.insert(param.name.to_string(), value);
            }
            Err(violation) => violations.push(violation),
        }
    }

    for key in params.keys() {
        if schema.get(key).is_none() {
            tracing::debug!(field = %key, "ignoring unknown parameter");
        }
    }

    if !violations.is_empty() {
        return Err(ValidationFailed::new(violations));
    }

    serde_json::from_value(Value::Object(typed)).map_err(|e| {
        ValidationFailed::new(vec![Violation::new(
            "arguments",
            Constraint::Object,
            Some(Value::String(e.to_string())),
        )])
    })
}

/// Check one field and return its typed value.
fn check_field(param: &ParamSpec, value: Option<&Value>) -> Result<Value, Violation> {
    let value = match value {
        None | Some(Value::Null) => {
            return Err(Violation::new(param.name, Constraint::Required, None));
        }
        Some(v) => v,
    };

    let type_error = || Violation::new(param.name, Constraint::Type(param.ty), Some(value.clone()));

    match param.ty {
        ParamType::Integer => coerce_integer(value).map(Value::from).ok_or_else(type_error),
        ParamType::String => {
            let s = value.as_str().ok_or_else(type_error)?;
            // Optional fields may be explicitly blank, which is also their default.
            let blank_allowed = !param.is_required() && s.is_empty();
            match param.format {
                Some(format) if !blank_allowed && !matches_format(format, s) => Err(
                    Violation::new(param.name, Constraint::Format(format), Some(value.clone())),
                ),
                _ => Ok(value.clone()),
            }
        }
    }
}

/// Integers may arrive as JSON numbers, integral floats such as `67.0`,
/// or integer strings.
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn integral(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}

fn matches_format(format: Format, s: &str) -> bool {
    match format {
        Format::Email => EMAIL.is_match(s),
        Format::Url => url::Url::parse(s).is_ok_and(|u| !u.cannot_be_a_base()),
    }
}
