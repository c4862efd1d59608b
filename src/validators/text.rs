use super::{Invalid, Message, State, ValidationResult, Validator, scalar_text};
use serde_json::Value;

/// Text validator with optional length limits.
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    min: Option<usize>,
    max: Option<usize>,
    not_empty: bool,
    strip: bool,
}

impl StringValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum length in characters.
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Values must be shorter than `max` characters plus one.
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// Trim surrounding whitespace before checking.
    pub fn strip(mut self) -> Self {
        self.strip = true;
        self
    }
}

impl Validator for StringValidator {
    fn convert(&self, value: &Value, _state: &State) -> ValidationResult<Value> {
        let raw = scalar_text(value)?;
        let text = if self.strip { raw.trim() } else { raw.as_ref() };

        if self.not_empty && text.is_empty() {
            return Err(Invalid::key(self.empty_message(), Some(value)));
        }

        let length = text.chars().count();
        if let Some(max) = self.max {
            if length > max {
                return Err(Invalid::new(Message::new("too_long").arg("max", max), Some(value)));
            }
        }
        if let Some(min) = self.min {
            if length < min {
                return Err(Invalid::new(Message::new("too_short").arg("min", min), Some(value)));
            }
        }
        Ok(Value::String(text.to_string()))
    }

    fn is_required(&self) -> bool {
        self.not_empty
    }

    fn empty_value(&self) -> Value {
        Value::String(String::new())
    }
}

/// Requires a non-blank value and passes it through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotEmpty;

impl NotEmpty {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for NotEmpty {
    fn convert(&self, value: &Value, _state: &State) -> ValidationResult<Value> {
        if let Value::String(s) = value {
            if s.trim().is_empty() {
                return Err(Invalid::key(self.empty_message(), Some(value)));
            }
        }
        Ok(value.clone())
    }

    fn is_required(&self) -> bool {
        true
    }
}

/// Accepts only values from a fixed list.
#[derive(Debug, Clone)]
pub struct OneOf {
    items: Vec<String>,
    not_empty: bool,
}

impl OneOf {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            not_empty: false,
        }
    }

    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }
}

impl Validator for OneOf {
    fn convert(&self, value: &Value, _state: &State) -> ValidationResult<Value> {
        let text = scalar_text(value)?;
        if self.items.iter().any(|item| item == text.as_ref()) {
            Ok(Value::String(text.into_owned()))
        } else {
            Err(Invalid::new(
                Message::new("not_in").arg("items", self.items.join(", ")),
                Some(value),
            ))
        }
    }

    fn is_required(&self) -> bool {
        self.not_empty
    }
}

const TRUE_VALUES: &[&str] = &["true", "t", "yes", "y", "on", "1"];
const FALSE_VALUES: &[&str] = &["false", "f", "no", "n", "off", "0"];

/// Converts checkbox-style text to a boolean; empty input is `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bool;

impl Bool {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for Bool {
    fn convert(&self, value: &Value, _state: &State) -> ValidationResult<Value> {
        if let Value::Bool(b) = value {
            return Ok(Value::Bool(*b));
        }
        let text = scalar_text(value)?.trim().to_ascii_lowercase();
        if TRUE_VALUES.contains(&text.as_str()) {
            Ok(Value::Bool(true))
        } else if FALSE_VALUES.contains(&text.as_str()) {
            Ok(Value::Bool(false))
        } else {
            Err(Invalid::key("bool", Some(value)))
        }
    }

    fn empty_value(&self) -> Value {
        Value::Bool(false)
    }
}

/// Requires the value to match a regular expression.
#[derive(Debug, Clone)]
pub struct Regex {
    pattern: regex::Regex,
    strip: bool,
    not_empty: bool,
}

impl Regex {
    /// Compile `pattern`.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
            strip: false,
            not_empty: false,
        })
    }

    pub fn strip(mut self) -> Self {
        self.strip = true;
        self
    }

    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }
}

impl Validator for Regex {
    fn convert(&self, value: &Value, _state: &State) -> ValidationResult<Value> {
        let raw = scalar_text(value)?;
        let text = if self.strip { raw.trim() } else { raw.as_ref() };
        if self.pattern.is_match(text) {
            Ok(Value::String(text.to_string()))
        } else {
            Err(Invalid::key("pattern", Some(value)))
        }
    }

    fn is_required(&self) -> bool {
        self.not_empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use serde_json::json;

    fn state() -> State {
        State::default()
    }

    #[test]
    fn test_string_length_limits() {
        let validator = StringValidator::new().min(2).max(4);
        assert_eq!(validator.to_python(Some(&json!("abc")), &state()), Ok(json!("abc")));

        let short = validator.to_python(Some(&json!("a")), &state()).unwrap_err();
        assert_eq!(short.render(Locale::En), "Enter a value 2 characters long or more");

        let long = validator.to_python(Some(&json!("abcde")), &state()).unwrap_err();
        assert_eq!(long.render(Locale::En), "Enter a value less than 4 characters long");
    }

    #[test]
    fn test_string_counts_characters_not_bytes() {
        let validator = StringValidator::new().max(3);
        assert!(validator.to_python(Some(&json!("да!")), &state()).is_ok());
    }

    #[test]
    fn test_string_empty_value_is_empty_string() {
        assert_eq!(StringValidator::new().to_python(None, &state()), Ok(json!("")));
    }

    #[test]
    fn test_string_not_empty_with_strip() {
        let validator = StringValidator::new().not_empty().strip();
        let err = validator.to_python(Some(&json!("   ")), &state()).unwrap_err();
        assert_eq!(err.render(Locale::En), "Please enter a value");
        assert_eq!(validator.to_python(Some(&json!(" me ")), &state()), Ok(json!("me")));
    }

    #[test]
    fn test_not_empty() {
        assert!(NotEmpty.to_python(None, &state()).is_err());
        assert!(NotEmpty.to_python(Some(&json!("  ")), &state()).is_err());
        assert_eq!(NotEmpty.to_python(Some(&json!("Razer")), &state()), Ok(json!("Razer")));
    }

    #[test]
    fn test_one_of() {
        let validator = OneOf::new(["red", "green"]);
        assert_eq!(validator.to_python(Some(&json!("red")), &state()), Ok(json!("red")));
        let err = validator.to_python(Some(&json!("blue")), &state()).unwrap_err();
        assert_eq!(err.render(Locale::En), "Value must be one of: red, green");
    }

    #[test]
    fn test_bool() {
        assert_eq!(Bool.to_python(Some(&json!("ON")), &state()), Ok(json!(true)));
        assert_eq!(Bool.to_python(Some(&json!("0")), &state()), Ok(json!(false)));
        assert_eq!(Bool.to_python(None, &state()), Ok(json!(false)));
        assert!(Bool.to_python(Some(&json!("maybe")), &state()).is_err());
    }

    #[test]
    fn test_regex() {
        let validator = Regex::new(r"^[A-Z]{3}-\d+$").unwrap();
        assert!(validator.to_python(Some(&json!("ABC-12")), &state()).is_ok());
        let err = validator.to_python(Some(&json!("abc")), &state()).unwrap_err();
        assert_eq!(err.render(Locale::De), "Die Eingabe ist ungültig");
        assert!(Regex::new("(").is_err());
    }
}
