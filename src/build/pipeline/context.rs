//! Pipeline context for sharing configuration across stages.

use std::path::Path;

use pulldown_cmark::Options;

use crate::build::markdown::{MarkdownError, markdown_options};
use crate::config::BuildConfig;

/// Shared context for pipeline stages.
pub struct PipelineContext<'a> {
    /// Site data document to load
    pub data_path: &'a Path,

    /// Page template to render with
    pub template_path: &'a Path,

    /// Where the final page is written
    pub output_path: &'a Path,

    /// Parsed markdown options
    pub markdown_options: Options,
}

impl<'a> PipelineContext<'a> {
    /// Create a pipeline context from a build configuration.
    ///
    /// Fails if the configuration names an unknown markdown extension.
    pub fn new(config: &'a BuildConfig) -> Result<Self, MarkdownError> {
        Ok(Self {
            data_path: &config.data,
            template_path: &config.template,
            output_path: &config.output,
            markdown_options: markdown_options(&config.markdown)?,
        })
    }
}
