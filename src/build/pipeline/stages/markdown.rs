//! Markdown field rendering stage.

use crate::build::fields::process_markdown_fields;
use crate::build::pipeline::{PipelineContext, PipelineError, SiteDocument, Stage};

/// Stage that renders the markdown fields of the site data to HTML.
///
/// After this stage, `basics.bio`, `basics.short_bio`, and the `text`,
/// `summary` and `authors` fields of news, projects and publications hold
/// HTML fragments. Nothing else in the data changes.
pub struct MarkdownStage;

impl Stage for MarkdownStage {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn process(
        &self,
        site: &mut SiteDocument,
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        let data = site
            .data
            .as_mut()
            .ok_or_else(|| PipelineError::stage("markdown", "no site data (was load stage run?)"))?;

        site.rendered_fields = process_markdown_fields(data, ctx.markdown_options)?;
        tracing::info!(fields = site.rendered_fields, "rendered markdown fields");

        Ok(())
    }
}
