use super::{Invalid, Message, State, ValidationResult, Validator, scalar_text};
use serde_json::{Value, json};

/// Converts text to an integer.
#[derive(Debug, Clone, Default)]
pub struct Int {
    min: Option<i64>,
    max: Option<i64>,
    not_empty: bool,
}

impl Int {
    pub fn new() -> Self {
        Self::default()
    }

    /// Smallest accepted value.
    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Largest accepted value.
    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Reject empty input instead of converting it to `null`.
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }
}

impl Validator for Int {
    fn convert(&self, value: &Value, _state: &State) -> ValidationResult<Value> {
        let number = match value.as_i64() {
            Some(n) => n,
            None => scalar_text(value)?
                .trim()
                .parse::<i64>()
                .map_err(|_| Invalid::key("integer", Some(value)))?,
        };

        if let Some(min) = self.min {
            if number < min {
                return Err(Invalid::new(Message::new("too_low").arg("min", min), Some(value)));
            }
        }
        if let Some(max) = self.max {
            if number > max {
                return Err(Invalid::new(Message::new("too_high").arg("max", max), Some(value)));
            }
        }
        Ok(json!(number))
    }

    fn is_required(&self) -> bool {
        self.not_empty
    }
}

/// Converts text to a number; integral values stay integers.
#[derive(Debug, Clone, Default)]
pub struct Number {
    not_empty: bool,
}

impl Number {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }
}

impl Validator for Number {
    fn convert(&self, value: &Value, _state: &State) -> ValidationResult<Value> {
        let number = match value.as_f64() {
            Some(n) => n,
            None => scalar_text(value)?
                .trim()
                .parse::<f64>()
                .map_err(|_| Invalid::key("number", Some(value)))?,
        };
        if !number.is_finite() {
            return Err(Invalid::key("number", Some(value)));
        }
        if number.fract() == 0.0 && number.abs() < i64::MAX as f64 {
            return Ok(json!(number as i64));
        }
        Ok(json!(number))
    }

    fn is_required(&self) -> bool {
        self.not_empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use proptest::prelude::*;

    fn state() -> State {
        State::default()
    }

    #[test]
    fn test_int_converts_text() {
        let value = Int::new().to_python(Some(&json!(" 2007 ")), &state());
        assert_eq!(value, Ok(json!(2007)));
    }

    #[test]
    fn test_int_rejects_garbage() {
        let err = Int::new().to_python(Some(&json!("t007")), &state()).unwrap_err();
        assert_eq!(err.render(Locale::En), "Please enter an integer value");
        assert_eq!(err.value(), Some(&json!("t007")));
    }

    #[test]
    fn test_int_empty_is_null_unless_required() {
        assert_eq!(Int::new().to_python(None, &state()), Ok(Value::Null));
        assert_eq!(Int::new().to_python(Some(&json!("")), &state()), Ok(Value::Null));

        let err = Int::new().not_empty().to_python(None, &state()).unwrap_err();
        assert_eq!(err.render(Locale::En), "Please enter a value");
    }

    #[test]
    fn test_int_bounds() {
        let validator = Int::new().min(1).max(10);
        assert_eq!(validator.to_python(Some(&json!("5")), &state()), Ok(json!(5)));

        let low = validator.to_python(Some(&json!("0")), &state()).unwrap_err();
        assert_eq!(low.render(Locale::En), "Please enter a number that is 1 or greater");

        let high = validator.to_python(Some(&json!("11")), &state()).unwrap_err();
        assert_eq!(high.render(Locale::En), "Please enter a number that is 10 or smaller");
    }

    #[test]
    fn test_number_keeps_integral_values_integer() {
        assert_eq!(Number::new().to_python(Some(&json!("3.0")), &state()), Ok(json!(3)));
        assert_eq!(Number::new().to_python(Some(&json!("3.5")), &state()), Ok(json!(3.5)));
        assert!(Number::new().to_python(Some(&json!("inf")), &state()).is_err());
        assert!(Number::new().to_python(Some(&json!("abc")), &state()).is_err());
    }

    proptest! {
        #[test]
        fn prop_int_accepts_any_i64_text(n in any::<i64>()) {
            let value = Int::new().to_python(Some(&json!(n.to_string())), &state());
            prop_assert_eq!(value, Ok(json!(n)));
        }

        #[test]
        fn prop_int_rejects_alphabetic_text(s in "[a-zA-Z]{1,12}") {
            prop_assert!(Int::new().to_python(Some(&json!(s)), &state()).is_err());
        }
    }
}
