//! Field and whole-form validators.
//!
//! A [`Validator`] checks one submitted value and converts it to its semantic
//! type. A [`ChainedValidator`] runs after all fields of a
//! [`crate::schema::Schema`] converted successfully and checks rules that span
//! fields.
//!
//! Failures are reported as [`Invalid`], which carries an untranslated
//! [`Message`]. Text is produced only when the errors are unpacked for a
//! locale.

mod chained;
mod date;
mod email;
mod numeric;
mod text;

pub use chained::{FieldsMatch, RequireIfPresent};
pub use date::DateConverter;
pub use email::Email;
pub use numeric::{Int, Number};
pub use text::{Bool, NotEmpty, OneOf, Regex, StringValidator};

use crate::i18n::{Locale, translate};
use crate::params::{Params, type_name};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Field name to translated error message.
pub type FormErrors = BTreeMap<String, String>;

/// Key under which errors that belong to no single field are reported.
pub const FORM_ERROR_KEY: &str = "_form";

/// Per-request state handed to validators.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    /// Locale negotiated for the request
    pub locale: Locale,
    /// Request id for log correlation
    pub request_id: String,
}

impl State {
    pub fn new(locale: Locale, request_id: impl Into<String>) -> Self {
        Self {
            locale,
            request_id: request_id.into(),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Locale::En, "")
    }
}

/// A catalog message key with named arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub key: String,
    pub args: Vec<(String, String)>,
}

impl Message {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            args: Vec::new(),
        }
    }

    /// Add a named placeholder argument.
    pub fn arg(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.args.push((name.into(), value.to_string()));
        self
    }

    /// Render the message for a locale.
    pub fn translate(&self, locale: Locale) -> String {
        translate(locale, &self.key, &self.args)
    }
}

/// A validation failure.
///
/// Single-field failures carry a [`Message`]. Compound failures (from a
/// schema or a chained validator) carry an `error_dict` keyed by field.
#[derive(Debug, Clone, PartialEq)]
pub struct Invalid {
    message: Option<Message>,
    value: Option<Value>,
    error_dict: BTreeMap<String, Invalid>,
}

impl Invalid {
    /// Create a failure for a single value.
    pub fn new(message: Message, value: Option<&Value>) -> Self {
        Self {
            message: Some(message),
            value: value.cloned(),
            error_dict: BTreeMap::new(),
        }
    }

    /// Shorthand for a message without arguments.
    pub fn key(key: &str, value: Option<&Value>) -> Self {
        Self::new(Message::new(key), value)
    }

    /// Create a compound failure from per-field failures.
    pub fn compound(error_dict: BTreeMap<String, Invalid>) -> Self {
        Self {
            message: None,
            value: None,
            error_dict,
        }
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn error_dict(&self) -> &BTreeMap<String, Invalid> {
        &self.error_dict
    }

    pub fn is_compound(&self) -> bool {
        !self.error_dict.is_empty()
    }

    /// Render this failure as a single string.
    ///
    /// Compound failures render one `field: message` line per field.
    pub fn render(&self, locale: Locale) -> String {
        match &self.message {
            Some(message) if self.error_dict.is_empty() => message.translate(locale),
            _ => self
                .error_dict
                .iter()
                .map(|(field, error)| format!("{field}: {}", error.render(locale)))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Flatten into field name to message, translated for `locale`.
    pub fn unpack_errors(&self, locale: Locale) -> FormErrors {
        if self.error_dict.is_empty() {
            let mut errors = FormErrors::new();
            errors.insert(FORM_ERROR_KEY.to_string(), self.render(locale));
            return errors;
        }
        self.error_dict
            .iter()
            .map(|(field, error)| (field.clone(), error.render(locale)))
            .collect()
    }
}

impl std::fmt::Display for Invalid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(Locale::En))
    }
}

impl std::error::Error for Invalid {}

/// Result type for validator conversions.
pub type ValidationResult<T> = Result<T, Invalid>;

/// Check and convert a single submitted value.
pub trait Validator: Debug + Send + Sync {
    /// Convert a non-empty value.
    fn convert(&self, value: &Value, state: &State) -> ValidationResult<Value>;

    /// Whether an empty or missing value is an error.
    fn is_required(&self) -> bool {
        false
    }

    /// Message key reported for an empty value when required.
    fn empty_message(&self) -> &'static str {
        "empty"
    }

    /// Value produced for an empty, non-required input.
    fn empty_value(&self) -> Value {
        Value::Null
    }

    /// Value substituted when a schema field is absent altogether.
    fn if_missing(&self) -> Option<Value> {
        None
    }

    /// Validate and convert a possibly missing value.
    fn to_python(&self, value: Option<&Value>, state: &State) -> ValidationResult<Value> {
        match value {
            Some(v) if !is_empty(v) => self.convert(v, state),
            _ if self.is_required() => Err(Invalid::key(self.empty_message(), value)),
            _ => Ok(self.empty_value()),
        }
    }
}

/// Validator run over the whole converted field set.
pub trait ChainedValidator: Debug + Send + Sync {
    /// Check (and optionally transform) the converted values.
    fn validate(&self, values: Params, state: &State) -> ValidationResult<Params>;
}

/// `null`, the empty string and empty collections count as empty.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Text of a scalar value; collections are rejected.
pub(crate) fn scalar_text(value: &Value) -> ValidationResult<Cow<'_, str>> {
    match value {
        Value::String(s) => Ok(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Ok(Cow::Owned(n.to_string())),
        Value::Bool(b) => Ok(Cow::Owned(b.to_string())),
        other => Err(Invalid::new(
            Message::new("bad_type").arg("kind", type_name(other)),
            Some(other),
        )),
    }
}
