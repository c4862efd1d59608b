use super::{ChainedValidator, Invalid, Message, State, ValidationResult, is_empty};
use crate::params::Params;
use serde_json::Value;
use std::collections::BTreeMap;

/// All listed fields must hold the same value as the first one.
#[derive(Debug, Clone)]
pub struct FieldsMatch {
    fields: Vec<String>,
}

impl FieldsMatch {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

impl ChainedValidator for FieldsMatch {
    fn validate(&self, values: Params, _state: &State) -> ValidationResult<Params> {
        let Some((first, rest)) = self.fields.split_first() else {
            return Ok(values);
        };
        let expected = values.get(first).cloned().unwrap_or(Value::Null);

        let errors: BTreeMap<String, Invalid> = rest
            .iter()
            .filter_map(|name| {
                let actual = values.get(name).cloned().unwrap_or(Value::Null);
                (actual != expected)
                    .then(|| (name.clone(), Invalid::key("fields_mismatch", Some(&actual))))
            })
            .collect();

        if errors.is_empty() {
            Ok(values)
        } else {
            Err(Invalid::compound(errors))
        }
    }
}

/// `required` must be filled in whenever `present` is.
#[derive(Debug, Clone)]
pub struct RequireIfPresent {
    required: String,
    present: String,
}

impl RequireIfPresent {
    pub fn new(required: impl Into<String>, present: impl Into<String>) -> Self {
        Self {
            required: required.into(),
            present: present.into(),
        }
    }
}

impl ChainedValidator for RequireIfPresent {
    fn validate(&self, values: Params, _state: &State) -> ValidationResult<Params> {
        let filled = |name: &str| values.get(name).is_some_and(|v| !is_empty(v));
        if filled(&self.present) && !filled(&self.required) {
            let mut errors = BTreeMap::new();
            errors.insert(
                self.required.clone(),
                Invalid::new(
                    Message::new("require_if_present").arg("required", &self.required),
                    values.get(&self.required),
                ),
            );
            return Err(Invalid::compound(errors));
        }
        Ok(values)
    }
}
