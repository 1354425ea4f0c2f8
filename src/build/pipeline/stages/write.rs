//! File writing stage.

use crate::build::pipeline::{PipelineContext, PipelineError, SiteDocument, Stage};

/// Stage that writes the rendered page to the output file.
///
/// The file is created if absent and fully overwritten otherwise. Missing
/// parent directories are created.
pub struct WriteStage;

impl Stage for WriteStage {
    fn name(&self) -> &'static str {
        "write"
    }

    fn process(
        &self,
        site: &mut SiteDocument,
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        let html = site.output_html.as_ref().ok_or_else(|| {
            PipelineError::stage("write", "no output HTML (was template stage run?)")
        })?;

        let output_path = ctx.output_path;
        let write_error = |e| PipelineError::Write(output_path.to_path_buf(), e);

        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }

        std::fs::write(output_path, html).map_err(write_error)?;

        site.bytes_written = html.len();
        tracing::info!(path = %output_path.display(), bytes = html.len(), "wrote page");

        Ok(())
    }
}
