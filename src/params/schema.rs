// ABOUTME: Declarative description of the register_user parameters: type,
// ABOUTME: required-ness, string format and default for each field.

use std::fmt;

use serde_json::{Map, Value};

/// Logo used when the caller supplies none.
pub const DEFAULT_LOGO_PLACEHOLDER: &str =
    "https://tm-uat-resources.s3.ap-south-1.amazonaws.com/brand-logo/blank-logo-main.png";

/// Primitive type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
}

impl ParamType {
    fn json_type(self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Integer => "integer",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_type())
    }
}

/// String format constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Email,
    Url,
}

impl Format {
    fn json_format(self) -> &'static str {
        match self {
            Format::Email => "email",
            Format::Url => "uri",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Email => f.write_str("email address"),
            Format::Url => f.write_str("absolute URL"),
        }
    }
}

/// A single parameter declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub ty: ParamType,
    pub format: Option<Format>,
    /// `None` marks the parameter as required.
    pub default: Option<Value>,
    pub description: &'static str,
}

impl ParamSpec {
    fn required(name: &'static str, ty: ParamType, description: &'static str) -> Self {
        Self {
            name,
            ty,
            format: None,
            default: None,
            description,
        }
    }

    fn optional(
        name: &'static str,
        ty: ParamType,
        default: impl Into<Value>,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            ty,
            format: None,
            default: Some(default.into()),
            description,
        }
    }

    fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// Ordered set of parameter declarations for one tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSchema {
    params: Vec<ParamSpec>,
}

impl ParameterSchema {
    /// Build a schema from explicit declarations.
    pub fn new(params: Vec<ParamSpec>) -> Self {
        Self { params }
    }

    /// The register_user schema. Only the user identity is mandatory;
    /// everything else falls back to the registration service's defaults.
    pub fn register_user(logo_placeholder: impl Into<String>) -> Self {
        use ParamType::{Integer, String as Str};

        let logo_placeholder: String = logo_placeholder.into();
        Self::new(vec![
            ParamSpec::required("username", Str, "User's full name"),
            ParamSpec::required("emailid", Str, "User's email address").format(Format::Email),
            ParamSpec::required("contact_no", Str, "User's contact number"),
            ParamSpec::optional("admin_id", Integer, 67, "Admin ID"),
            ParamSpec::optional("organization_id", Integer, 76, "Organization ID"),
            ParamSpec::optional("superadmin_id", Integer, 1, "Super admin ID"),
            ParamSpec::optional("associate_id", Integer, 1, "Associate ID"),
            ParamSpec::optional("exam_id", Integer, 2, "Exam ID"),
            ParamSpec::optional("set_id", Integer, 16, "Question set ID"),
            ParamSpec::optional("logo", Str, logo_placeholder, "Header logo URL")
                .format(Format::Url),
            ParamSpec::optional("name", Str, "", "Header brand name"),
            ParamSpec::optional("primary", Str, "", "Primary color"),
            ParamSpec::optional("background", Str, "", "Background color"),
            ParamSpec::optional("cta", Str, "", "Call-to-action color"),
            ParamSpec::optional("cta_text_color", Str, "", "Call-to-action text color"),
            ParamSpec::optional("cta_text", Str, "", "Call-to-action text"),
            ParamSpec::optional("copyright_text", Str, "", "Footer copyright text"),
            ParamSpec::optional("test_name", Str, "", "Footer test name"),
            ParamSpec::optional("backtodashboard", Str, "", "Back-to-dashboard link")
                .format(Format::Url),
            ParamSpec::optional("testlink", Str, "", "Test link").format(Format::Url),
            ParamSpec::optional("reportlink", Str, "", "Report link").format(Format::Url),
            ParamSpec::optional("client_id", Str, "", "Client ID"),
            ParamSpec::optional("client_log", Str, "", "Client log"),
        ])
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    pub fn get(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// JSON Schema advertised to RPC clients.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &self.params {
            let mut prop = Map::new();
            prop.insert("type".into(), param.ty.json_type().into());
            prop.insert("description".into(), param.description.into());
            if let Some(format) = param.format {
                prop.insert("format".into(), format.json_format().into());
            }
            match &param.default {
                Some(default) => {
                    prop.insert("default".into(), default.clone());
                }
                None => required.push(Value::from(param.name)),
            }
            properties.insert(param.name.to_string(), Value::Object(prop));
        }

        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}
