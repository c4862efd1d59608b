//! Form widgets.
//!
//! A [`TableForm`] bundles its fields, their validators and HTML rendering.
//! The same form object validates a submission (through the [`Schema`] it
//! derives) and re-renders itself with the submitted values and error
//! messages.
//!
//! [`Schema`]: crate::schema::Schema

mod field;
mod form;

pub use field::{Field, FieldKind};
pub use form::TableForm;

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Human label for a field name: `first_name` becomes `First Name`.
pub fn name_to_label(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
