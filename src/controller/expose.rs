//! Response rendering for actions.

use crate::error::FormgateResult;
use crate::params::{Params, value_text};
use serde_json::Value;

/// How an action's output is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expose {
    /// `application/json`
    Json,
    /// `text/plain`, the default
    #[default]
    Text,
    /// `text/html`
    Html,
}

impl Expose {
    pub fn content_type(self) -> &'static str {
        match self {
            Expose::Json => "application/json",
            Expose::Text => "text/plain; charset=utf-8",
            Expose::Html => "text/html; charset=utf-8",
        }
    }

    /// Serialize a handler's output.
    ///
    /// JSON exposure encodes text output as a JSON string. Text and HTML
    /// exposure write text verbatim and JSON values in compact form.
    pub fn render(self, output: Output) -> FormgateResult<String> {
        match (self, output) {
            (Expose::Json, Output::Json(value)) => Ok(serde_json::to_string(&value)?),
            (Expose::Json, Output::Text(text)) => Ok(serde_json::to_string(&text)?),
            (_, Output::Text(text)) => Ok(text),
            (_, Output::Json(value)) => Ok(value_text(&value)),
        }
    }
}

/// Value returned by an action handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Json(Value),
    Text(String),
}

impl Output {
    pub fn text(text: impl Into<String>) -> Self {
        Output::Text(text.into())
    }

    /// JSON object built from a parameter map.
    pub fn json_map(params: Params) -> Self {
        Output::Json(params.into())
    }
}

impl From<Value> for Output {
    fn from(value: Value) -> Self {
        Output::Json(value)
    }
}

impl From<String> for Output {
    fn from(text: String) -> Self {
        Output::Text(text)
    }
}

impl From<&str> for Output {
    fn from(text: &str) -> Self {
        Output::Text(text.to_string())
    }
}
