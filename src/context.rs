//! Per-request context.
//!
//! The context is where validation leaves its results for handlers: the
//! translated `form_errors` and the raw `form_values` that were submitted.
//! A handler that runs after a failed validation can inspect both and decide
//! how to respond.

use crate::i18n::Locale;
use crate::params::Params;
use crate::validators::{FormErrors, State};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Request-scoped data visible to handlers.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Unique identifier for this request
    pub request_id: String,
    /// Locale negotiated from `Accept-Language`
    pub locale: Locale,
    /// Request headers with lowercased names
    pub headers: BTreeMap<String, String>,
    /// Translated validation errors, empty when validation passed
    pub form_errors: FormErrors,
    /// Raw submitted values, set when validation failed
    pub form_values: Params,
    /// Name of the action that was requested
    pub action: String,
}

impl RequestContext {
    /// Create a context with a specific request id.
    pub fn new(request_id: impl Into<String>, locale: Locale) -> Self {
        Self {
            request_id: request_id.into(),
            locale,
            ..Self::default()
        }
    }

    /// Create a context with a generated request id.
    pub fn with_generated_id(locale: Locale) -> Self {
        Self::new(Uuid::new_v4().to_string(), locale)
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Whether validation failed for this request.
    pub fn validation_failed(&self) -> bool {
        !self.form_errors.is_empty()
    }

    /// Error message for one field.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.form_errors.get(field).map(String::as_str)
    }

    /// Validator state for this request.
    pub fn state(&self) -> State {
        State::new(self.locale, self.request_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = RequestContext::with_generated_id(Locale::En);
        let b = RequestContext::with_generated_id(Locale::En);
        assert_ne!(a.request_id, b.request_id);
        assert!(!a.validation_failed());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut context = RequestContext::new("req-1", Locale::Ru);
        context
            .headers
            .insert("accept-language".to_string(), "ru".to_string());
        assert_eq!(context.header("Accept-Language"), Some("ru"));
    }

    #[test]
    fn test_state_carries_locale_and_id() {
        let context = RequestContext::new("req-2", Locale::De);
        let state = context.state();
        assert_eq!(state.locale, Locale::De);
        assert_eq!(state.request_id, "req-2");
    }

    #[test]
    fn test_errors() {
        let mut context = RequestContext::new("req-3", Locale::En);
        context
            .form_errors
            .insert("year".to_string(), "Please enter an integer value".to_string());
        assert!(context.validation_failed());
        assert_eq!(context.error_for("year"), Some("Please enter an integer value"));
        assert_eq!(context.error_for("title"), None);
    }
}
