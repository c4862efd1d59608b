use super::{Field, FieldKind, escape_html};
use crate::params::Params;
use crate::schema::Schema;
use crate::validators::{FormErrors, State, ValidationResult};

/// A form laid out as a two-column table of labels and inputs.
#[derive(Debug, Clone)]
pub struct TableForm {
    id: String,
    action: String,
    method: String,
    submit_text: String,
    fields: Vec<Field>,
}

impl TableForm {
    pub fn new(id: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            action: action.into(),
            method: "post".to_string(),
            submit_text: "Submit".to_string(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn submit_text(mut self, text: impl Into<String>) -> Self {
        self.submit_text = text.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Schema made of the fields' validators. Extra fields pass through.
    pub fn validator(&self) -> Schema {
        self.fields
            .iter()
            .filter_map(|field| {
                field
                    .validator_ref()
                    .map(|validator| (field.name(), validator.clone()))
            })
            .fold(Schema::new().allow_extra_fields(true), |schema, (name, v)| {
                schema.field_arc(name, v)
            })
    }

    /// Validate a submission against the form's fields.
    pub fn validate(&self, params: Params, state: &State) -> ValidationResult<Params> {
        self.validator().validate(params, state)
    }

    /// Render the form with prior values and error annotations.
    pub fn render(&self, values: &Params, errors: &FormErrors) -> String {
        let id = escape_html(&self.id);
        let mut html = format!(
            r#"<form id="{id}" action="{}" method="{}" class="tableform">"#,
            escape_html(&self.action),
            escape_html(&self.method)
        );

        html.push_str("<div>");
        for field in self.fields.iter().filter(|f| f.kind() == FieldKind::Hidden) {
            html.push_str(&field.render_input(&self.id, values.get(field.name()), None));
        }
        html.push_str("</div>");

        html.push_str(r#"<table border="0" cellspacing="0" cellpadding="2">"#);
        let visible = self.fields.iter().filter(|f| f.kind() != FieldKind::Hidden);
        let mut row = 0;
        for field in visible {
            let error = errors.get(field.name()).map(String::as_str);
            let mut class = if row % 2 == 0 { "even" } else { "odd" }.to_string();
            if error.is_some() {
                class.push_str(" has_error");
            }
            html.push_str(&format!(
                r#"<tr id="{}.container" class="{class}"><td class="labelcol">{}</td><td class="fieldcol">{}</td></tr>"#,
                escape_html(&field.input_id(&self.id)),
                field.render_label(&self.id),
                field.render_input(&self.id, values.get(field.name()), error)
            ));
            row += 1;
        }

        let class = if row % 2 == 0 { "even" } else { "odd" };
        html.push_str(&format!(
            r#"<tr id="{id}_submit.container" class="{class}"><td class="labelcol"></td><td class="fieldcol"><input type="submit" class="submitbutton" id="{id}_submit" value="{}" /></td></tr>"#,
            escape_html(&self.submit_text)
        ));
        html.push_str("</table></form>");
        html
    }
}
