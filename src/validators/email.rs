use super::{Invalid, Message, State, ValidationResult, Validator, scalar_text};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static USERNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w!#$%&'*+\-/=?^`{|}~.]+$").expect("username pattern compiles")
});

static DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[a-z0-9][a-z0-9\-]{0,62}\.)+[a-z]{2,}$").expect("domain pattern compiles")
});

/// Checks the shape of an email address. No DNS lookups are made.
#[derive(Debug, Clone, Copy, Default)]
pub struct Email {
    not_empty: bool,
}

impl Email {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }
}

impl Validator for Email {
    fn convert(&self, value: &Value, _state: &State) -> ValidationResult<Value> {
        let raw = scalar_text(value)?;
        let address = raw.trim();
        if address.is_empty() {
            return Err(Invalid::key(self.empty_message(), Some(value)));
        }

        let mut parts = address.split('@');
        let (Some(username), Some(domain), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(Invalid::key("email_no_at", Some(value)));
        };

        if !USERNAME.is_match(username) {
            return Err(Invalid::new(
                Message::new("email_bad_username").arg("username", username),
                Some(value),
            ));
        }
        if !DOMAIN.is_match(domain) {
            return Err(Invalid::new(
                Message::new("email_bad_domain").arg("domain", domain),
                Some(value),
            ));
        }
        Ok(Value::String(address.to_string()))
    }

    fn is_required(&self) -> bool {
        self.not_empty
    }

    fn empty_message(&self) -> &'static str {
        "email_empty"
    }
}
