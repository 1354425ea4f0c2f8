//! Pipeline error types.

use crate::build::data::DataError;
use crate::build::markdown::MarkdownError;
use crate::build::render::RenderError;

/// Errors that can occur during pipeline processing.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("markdown rendering error: {0}")]
    Markdown(#[from] MarkdownError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to write {0}: {1}")]
    Write(std::path::PathBuf, std::io::Error),

    #[error("stage '{stage}' failed: {message}")]
    Stage { stage: String, message: String },
}

impl PipelineError {
    /// Create a stage-specific error.
    pub fn stage(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Stage {
            stage: stage.into(),
            message: message.into(),
        }
    }
}
