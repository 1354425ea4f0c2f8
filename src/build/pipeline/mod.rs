//! Build pipeline for the site page.
//!
//! The pipeline transforms the site through a series of stages:
//! 1. Load (site data from the data file)
//! 2. Markdown (rich-text fields to HTML)
//! 3. Template (page template rendering)
//! 4. Write (output to disk)
//!
//! Any failing stage stops the run, so the output file is only touched once
//! every earlier stage has succeeded.

mod context;
mod document;
mod error;
mod stages;

pub use context::PipelineContext;
pub use document::SiteDocument;
pub use error::PipelineError;

use stages::{LoadStage, MarkdownStage, TemplateStage, WriteStage};

/// A stage in the site processing pipeline.
///
/// Stages run sequentially, each transforming the site document in place
/// before it is passed to the next stage.
pub trait Stage {
    /// Unique name for this stage.
    fn name(&self) -> &'static str;

    /// Process the site document through this stage.
    fn process(&self, site: &mut SiteDocument, ctx: &PipelineContext)
    -> Result<(), PipelineError>;
}

/// The site processing pipeline.
///
/// The default pipeline includes: load → markdown → template → write.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline with no stages.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create the default pipeline with standard stages.
    ///
    /// Stages: load → markdown → template → write
    pub fn default_pipeline() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_stage(LoadStage);
        pipeline.add_stage(MarkdownStage);
        pipeline.add_stage(TemplateStage);
        pipeline.add_stage(WriteStage);
        pipeline
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Run the pipeline on a site document.
    pub fn run(&self, site: &mut SiteDocument, ctx: &PipelineContext) -> Result<(), PipelineError> {
        for stage in &self.stages {
            tracing::debug!(stage = stage.name(), "running stage");
            stage.process(site, ctx)?;
        }

        Ok(())
    }

    /// Get the names of all stages in order.
    #[allow(dead_code)]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::default_pipeline()
    }
}
