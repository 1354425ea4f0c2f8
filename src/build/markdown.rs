//! Markdown rendering for rich-text data fields.

use pulldown_cmark::{Options, Parser, html};

use crate::config::MarkdownConfig;

#[derive(thiserror::Error, Debug)]
pub enum MarkdownError {
    #[error("invalid markdown extension: {0}")]
    InvalidExtension(String),

    #[error("field '{field}' must be a string or null, found {found}")]
    NotText { field: String, found: &'static str },
}

/// Build pulldown-cmark options from the configured extension names.
pub fn markdown_options(markdown_config: &MarkdownConfig) -> Result<Options, MarkdownError> {
    let mut options = Options::empty();
    for extension in &markdown_config.extensions {
        match extension.as_str() {
            "extra" => {
                options.insert(Options::ENABLE_TABLES);
                options.insert(Options::ENABLE_FOOTNOTES);
                options.insert(Options::ENABLE_DEFINITION_LIST);
                options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
            }
            "definition_lists" => options.insert(Options::ENABLE_DEFINITION_LIST),
            "footnotes" => options.insert(Options::ENABLE_FOOTNOTES),
            "gfm" => options.insert(Options::ENABLE_GFM),
            "heading_attributes" => options.insert(Options::ENABLE_HEADING_ATTRIBUTES),
            "smart_punctuation" => options.insert(Options::ENABLE_SMART_PUNCTUATION),
            "strikethrough" => options.insert(Options::ENABLE_STRIKETHROUGH),
            "tables" => options.insert(Options::ENABLE_TABLES),
            "tasklists" => options.insert(Options::ENABLE_TASKLISTS),
            other => return Err(MarkdownError::InvalidExtension(other.to_string())),
        }
    }
    Ok(options)
}

/// Render markdown to an HTML fragment.
///
/// `None` renders to the empty string. Trailing newlines are trimmed so a
/// single paragraph comes back as exactly `<p>...</p>`.
pub fn render_markdown(markdown: Option<&str>, options: Options) -> String {
    let Some(markdown) = markdown else {
        return String::new();
    };

    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    let trimmed_len = html_output.trim_end_matches('\n').len();
    html_output.truncate(trimmed_len);
    html_output
}
