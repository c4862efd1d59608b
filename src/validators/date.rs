use super::{Invalid, Message, State, ValidationResult, Validator, scalar_text};
use chrono::NaiveDate;
use serde_json::Value;

const ISO_DATE: &str = "%Y-%m-%d";

/// Parses a date in a fixed format and converts it to ISO `YYYY-MM-DD`.
#[derive(Debug, Clone)]
pub struct DateConverter {
    format: String,
    not_empty: bool,
}

impl DateConverter {
    /// Month/day/year, e.g. `12/31/2007`.
    pub fn new() -> Self {
        Self::with_format("%m/%d/%Y")
    }

    /// Use a chrono `strftime` format.
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            not_empty: false,
        }
    }

    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// The format as shown to users (`%m/%d/%Y` becomes `mm/dd/yyyy`).
    pub fn display_format(&self) -> String {
        self.format
            .replace("%Y", "yyyy")
            .replace("%y", "yy")
            .replace("%m", "mm")
            .replace("%d", "dd")
    }
}

impl Default for DateConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for DateConverter {
    fn convert(&self, value: &Value, _state: &State) -> ValidationResult<Value> {
        let text = scalar_text(value)?;
        NaiveDate::parse_from_str(text.trim(), &self.format)
            .map(|date| Value::String(date.format(ISO_DATE).to_string()))
            .map_err(|_| {
                Invalid::new(
                    Message::new("bad_date").arg("format", self.display_format()),
                    Some(value),
                )
            })
    }

    fn is_required(&self) -> bool {
        self.not_empty
    }
}
