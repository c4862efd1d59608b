use super::{escape_html, name_to_label};
use crate::params::value_text;
use crate::validators::Validator;
use serde_json::Value;
use std::sync::Arc;

/// Input element type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
    Hidden,
    TextArea,
}

impl FieldKind {
    fn css_class(self) -> &'static str {
        match self {
            FieldKind::Text => "textfield",
            FieldKind::Password => "passwordfield",
            FieldKind::Hidden => "hiddenfield",
            FieldKind::TextArea => "textarea",
        }
    }
}

/// A single form input with an optional validator.
#[derive(Debug, Clone)]
pub struct Field {
    kind: FieldKind,
    name: String,
    label: Option<String>,
    size: Option<u32>,
    validator: Option<Arc<dyn Validator>>,
}

impl Field {
    fn new(kind: FieldKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            label: None,
            size: None,
            validator: None,
        }
    }

    /// Single-line text input.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(FieldKind::Text, name)
    }

    /// Password input; submitted values are never rendered back.
    pub fn password(name: impl Into<String>) -> Self {
        Self::new(FieldKind::Password, name)
    }

    /// Hidden input, rendered outside the table.
    pub fn hidden(name: impl Into<String>) -> Self {
        Self::new(FieldKind::Hidden, name)
    }

    /// Multi-line text area.
    pub fn textarea(name: impl Into<String>) -> Self {
        Self::new(FieldKind::TextArea, name)
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Visible width in characters.
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn validator_ref(&self) -> Option<&Arc<dyn Validator>> {
        self.validator.as_ref()
    }

    /// Explicit label, or one derived from the field name.
    pub fn label_text(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| name_to_label(&self.name))
    }

    pub fn is_required(&self) -> bool {
        self.validator.as_ref().is_some_and(|v| v.is_required())
    }

    /// Element id of the input inside form `form_id`.
    pub fn input_id(&self, form_id: &str) -> String {
        format!("{form_id}_{}", self.name)
    }

    fn css_classes(&self, base: &str) -> String {
        if self.is_required() {
            format!("{base} required")
        } else {
            base.to_string()
        }
    }

    /// Render the `<label>` element.
    pub(crate) fn render_label(&self, form_id: &str) -> String {
        let id = escape_html(&self.input_id(form_id));
        format!(
            r#"<label id="{id}.label" for="{id}" class="{}">{}</label>"#,
            self.css_classes("fieldlabel"),
            escape_html(&self.label_text())
        )
    }

    /// Render the input element with its current value and error.
    pub(crate) fn render_input(
        &self,
        form_id: &str,
        value: Option<&Value>,
        error: Option<&str>,
    ) -> String {
        let id = escape_html(&self.input_id(form_id));
        let name = escape_html(&self.name);
        let class = self.css_classes(self.kind.css_class());
        let text = match self.kind {
            FieldKind::Password => String::new(),
            _ => escape_html(&value.map(value_text).unwrap_or_default()),
        };

        let mut html = match self.kind {
            FieldKind::TextArea => format!(
                r#"<textarea name="{name}" class="{class}" id="{id}" rows="7" cols="50">{text}</textarea>"#
            ),
            kind => {
                let input_type = match kind {
                    FieldKind::Password => "password",
                    FieldKind::Hidden => "hidden",
                    _ => "text",
                };
                let size = self
                    .size
                    .map(|size| format!(r#" size="{size}""#))
                    .unwrap_or_default();
                format!(
                    r#"<input type="{input_type}" name="{name}" class="{class}" id="{id}" value="{text}"{size} />"#
                )
            }
        };

        if let Some(error) = error {
            html.push_str(&format!(
                r#"<span class="fielderror">{}</span>"#,
                escape_html(error)
            ));
        }
        html
    }
}
