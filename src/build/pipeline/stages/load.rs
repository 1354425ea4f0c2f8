//! Site data loading stage.

use crate::build::data::load_site_data;
use crate::build::pipeline::{PipelineContext, PipelineError, SiteDocument, Stage};

/// Stage that loads the site data document.
///
/// After this stage, `site.data` holds the parsed data, with every field
/// exactly as it appears in the file.
pub struct LoadStage;

impl Stage for LoadStage {
    fn name(&self) -> &'static str {
        "load"
    }

    fn process(
        &self,
        site: &mut SiteDocument,
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        let data = load_site_data(ctx.data_path)?;
        tracing::info!(path = %ctx.data_path.display(), "loaded site data");

        site.data = Some(data);
        Ok(())
    }
}
