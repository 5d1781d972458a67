// Validation and configuration errors

use std::fmt;
use thiserror::Error;

/// A field whose value was rejected by one of its rules.
///
/// This is the expected, user-input-driven outcome of a run. It carries
/// enough structure for a host application to build its own error code or
/// HTTP status mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Lookup key of the field that failed
    pub field: String,

    /// Display name used when rendering the message
    pub name: String,

    /// Rendered, human-readable message
    pub message: String,

    /// Name of the rule that failed
    pub constraint: String,

    /// Raw value that failed
    pub value: Option<String>,
}

impl ValidationError {
    /// Error code reported to API clients.
    pub const CODE: &'static str = "request.params.invalid";

    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            name: field.clone(),
            constraint: "custom".to_string(),
            message: message.into(),
            field,
            value: None,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the constraint name
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }

    /// Set the invalid value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Convert to the JSON body handed to API clients.
    ///
    /// ```
    /// use paramguard_core::ValidationError;
    ///
    /// let err = ValidationError::new("mobile", "Mobile is malformed");
    /// let body = err.to_json();
    /// assert_eq!(body["code"], "request.params.invalid");
    /// assert_eq!(body["fields"]["mobile"], "Mobile is malformed");
    /// ```
    pub fn to_json(&self) -> serde_json::Value {
        let mut fields = serde_json::Map::new();
        fields.insert(
            self.field.clone(),
            serde_json::Value::String(self.message.clone()),
        );

        serde_json::json!({
            "code": Self::CODE,
            "message": self.message,
            "fields": fields,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// A rule set that cannot be run as written.
///
/// These are programming mistakes, never caused by user input, and are
/// reported when a field list is compiled against a catalogue.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown validation rule: {0}")]
    UnknownRule(String),

    #[error("Rule `{rule}` expects a {expected} parameter, got {found}")]
    ParamShape {
        rule: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Field key `{0}` is declared more than once")]
    DuplicateKey(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid bound: {0}")]
    InvalidBound(String),

    #[error("Failed to load time zone `{zone}`: {reason}")]
    InvalidTimeZone { zone: String, reason: String },
}

/// Failure of a one-shot [`Validator::validate`](crate::Validator::validate) call.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl Error {
    /// True if the rules themselves are broken
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// True if the input was rejected
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// The validation failure, if this is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(e) => Some(e),
            Error::Config(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
