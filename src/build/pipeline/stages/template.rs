//! Page template rendering stage.

use crate::build::pipeline::{PipelineContext, PipelineError, SiteDocument, Stage};
use crate::build::render::Renderer;

/// Stage that renders the page template with the processed site data.
///
/// Each top-level key of the data becomes a template variable. After this
/// stage, `site.output_html` contains the complete HTML page.
pub struct TemplateStage;

impl Stage for TemplateStage {
    fn name(&self) -> &'static str {
        "template"
    }

    fn process(
        &self,
        site: &mut SiteDocument,
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        let data = site
            .data
            .as_ref()
            .ok_or_else(|| PipelineError::stage("template", "no site data (was load stage run?)"))?;

        let renderer = Renderer::from_file(ctx.template_path)?;
        tracing::info!(path = %ctx.template_path.display(), "loaded template");

        site.output_html = Some(renderer.render(data)?);
        Ok(())
    }
}
