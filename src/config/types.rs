//! Configuration type definitions.
//!
//! These types are pure data - no I/O or complex logic.

use std::path::PathBuf;

use serde::Deserialize;

/// Config file read when none is named on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "sitegen.yaml";

/// Default path of the site data document.
const DEFAULT_DATA_FILE: &str = "data.json";

/// Default path of the page template.
const DEFAULT_TEMPLATE_FILE: &str = "template.html";

/// Default path of the generated page.
const DEFAULT_OUTPUT_FILE: &str = "index.html";

// =============================================================================
// Build configuration
// =============================================================================

/// Everything one build run needs to know: where to read, where to write,
/// and how to render markdown fields.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    /// Site data document (JSON, or YAML by extension)
    #[serde(default = "default_data_file")]
    pub data: PathBuf,
    /// Page template with Tera placeholders
    #[serde(default = "default_template_file")]
    pub template: PathBuf,
    /// Generated HTML page, overwritten on every successful run
    #[serde(default = "default_output_file")]
    pub output: PathBuf,
    /// Markdown processing configuration
    #[serde(default)]
    pub markdown: MarkdownConfig,
}

fn default_data_file() -> PathBuf {
    DEFAULT_DATA_FILE.into()
}

fn default_template_file() -> PathBuf {
    DEFAULT_TEMPLATE_FILE.into()
}

fn default_output_file() -> PathBuf {
    DEFAULT_OUTPUT_FILE.into()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            data: default_data_file(),
            template: default_template_file(),
            output: default_output_file(),
            markdown: MarkdownConfig::default(),
        }
    }
}

// =============================================================================
// Markdown configuration
// =============================================================================

/// Markdown processing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarkdownConfig {
    /// Extensions to enable for markdown processing.
    ///
    /// `extra` is a preset for tables, footnotes, definition lists and
    /// heading attributes.
    #[serde(default = "default_markdown_extensions")]
    pub extensions: Vec<String>,
}

fn default_markdown_extensions() -> Vec<String> {
    vec!["extra".to_string()]
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            extensions: default_markdown_extensions(),
        }
    }
}
