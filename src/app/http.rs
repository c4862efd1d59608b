//! Transport-independent request and response types.

use crate::error::{FormgateError, FormgateResult};
use crate::params::Params;
use serde_json::Value;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// An incoming request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Request {
    pub method: String,
    /// Path without the query string
    pub path: String,
    /// Raw query string, without the leading `?`
    pub query: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Request {
    /// Create a request for `target`, which may carry a `?query` suffix.
    pub fn new(method: impl Into<String>, target: &str) -> Self {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        Self {
            method: method.into(),
            path: path.to_string(),
            query: query.to_string(),
            ..Self::default()
        }
    }

    pub fn get(target: &str) -> Self {
        Self::new("GET", target)
    }

    pub fn post(target: &str) -> Self {
        Self::new("POST", target)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set a form-encoded body.
    pub fn form(mut self, params: &Params) -> Self {
        self.body = params.to_urlencoded();
        self.header("Content-Type", FORM_CONTENT_TYPE)
    }

    /// First header value with the given name, compared case-insensitively.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Query and body parameters; body values win.
    ///
    /// # Errors
    ///
    /// Fails when the body has a content type other than form encoding.
    pub fn params(&self) -> FormgateResult<Params> {
        let mut params = Params::from_urlencoded(&self.query);
        if self.body.is_empty() {
            return Ok(params);
        }
        if let Some(content_type) = self.header_value("content-type") {
            let media_type = content_type.split(';').next().unwrap_or_default().trim();
            if !media_type.eq_ignore_ascii_case(FORM_CONTENT_TYPE) {
                return Err(FormgateError::InvalidRequest {
                    message: format!("unsupported content type '{media_type}'"),
                });
            }
        }
        params.extend(Params::from_urlencoded(&self.body));
        Ok(params)
    }
}

/// A rendered response.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub content_type: String,
    pub body: String,
}

impl Response {
    pub fn ok(content_type: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether the body contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.body.contains(needle)
    }

    /// Decode the body as JSON.
    pub fn json(&self) -> FormgateResult<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
