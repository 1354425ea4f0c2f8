//! Markdown field processing.
//!
//! Only a fixed set of leaf fields is ever rewritten. Everything else in the
//! site data passes through as loaded, and a field that is absent stays absent.

use pulldown_cmark::Options;
use serde_json::Value;

use super::markdown::{MarkdownError, render_markdown};

/// Where a markdown field lives in the site data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkdownField {
    /// A field of a top-level object, e.g. `basics.bio`.
    Member {
        parent: &'static str,
        field: &'static str,
    },
    /// A field of every item in a top-level list, e.g. `news[].text`.
    EachItem {
        parent: &'static str,
        field: &'static str,
    },
}

/// The fields that hold markdown.
pub const MARKDOWN_FIELDS: &[MarkdownField] = &[
    MarkdownField::Member {
        parent: "basics",
        field: "bio",
    },
    MarkdownField::Member {
        parent: "basics",
        field: "short_bio",
    },
    MarkdownField::EachItem {
        parent: "news",
        field: "text",
    },
    MarkdownField::EachItem {
        parent: "projects",
        field: "summary",
    },
    MarkdownField::EachItem {
        parent: "publications",
        field: "authors",
    },
];

/// Replace every markdown field present in `data` with its rendered HTML.
///
/// Returns how many values were rendered. Parents that are missing or of the
/// wrong shape are skipped, as are list items that are not objects.
pub fn process_markdown_fields(data: &mut Value, options: Options) -> Result<usize, MarkdownError> {
    let mut rendered = 0;

    for spec in MARKDOWN_FIELDS {
        match *spec {
            MarkdownField::Member { parent, field } => {
                if let Some(object) = data.get_mut(parent).and_then(Value::as_object_mut)
                    && let Some(value) = object.get_mut(field)
                {
                    render_in_place(value, options, || format!("{parent}.{field}"))?;
                    rendered += 1;
                }
            }
            MarkdownField::EachItem { parent, field } => {
                let Some(items) = data.get_mut(parent).and_then(Value::as_array_mut) else {
                    continue;
                };
                for (index, item) in items.iter_mut().enumerate() {
                    if let Some(value) = item.as_object_mut().and_then(|o| o.get_mut(field)) {
                        render_in_place(value, options, || format!("{parent}[{index}].{field}"))?;
                        rendered += 1;
                    }
                }
            }
        }
    }

    Ok(rendered)
}

fn render_in_place(
    value: &mut Value,
    options: Options,
    field_path: impl FnOnce() -> String,
) -> Result<(), MarkdownError> {
    let html = match value {
        Value::Null => render_markdown(None, options),
        Value::String(text) => render_markdown(Some(text.as_str()), options),
        other => {
            return Err(MarkdownError::NotText {
                field: field_path(),
                found: kind_of(other),
            });
        }
    };
    *value = Value::String(html);
    Ok(())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
