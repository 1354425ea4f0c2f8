use std::path::{Path, PathBuf};

use crate::config::BuildConfig;

use super::data::DataError;
use super::pipeline::{Pipeline, PipelineContext, PipelineError, SiteDocument};
use super::render::RenderError;

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// An expected input file that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInput<'a> {
    DataFile(&'a Path),
    TemplateFile(&'a Path),
}

impl MissingInput<'_> {
    pub fn path(&self) -> &Path {
        match self {
            MissingInput::DataFile(path) | MissingInput::TemplateFile(path) => path,
        }
    }
}

impl BuildError {
    /// The input a build could not find, if that is why it failed.
    ///
    /// Only the data file and the template are reported this way; every
    /// other failure is a real error.
    pub fn missing_input(&self) -> Option<MissingInput<'_>> {
        match self {
            BuildError::Pipeline(PipelineError::Data(DataError::NotFound(path))) => {
                Some(MissingInput::DataFile(path))
            }
            BuildError::Pipeline(PipelineError::Render(RenderError::TemplateNotFound(path))) => {
                Some(MissingInput::TemplateFile(path))
            }
            _ => None,
        }
    }
}

pub struct BuildResult {
    pub output_path: PathBuf,
    pub rendered_fields: usize,
    pub bytes_written: usize,
}

pub struct Builder {
    config: BuildConfig,
    pipeline: Pipeline,
}

impl Builder {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            pipeline: Pipeline::default_pipeline(),
        }
    }

    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let ctx = PipelineContext::new(&self.config).map_err(PipelineError::from)?;

        let mut site = SiteDocument::new();
        self.pipeline.run(&mut site, &ctx)?;

        Ok(BuildResult {
            output_path: self.config.output.clone(),
            rendered_fields: site.rendered_fields,
            bytes_written: site.bytes_written,
        })
    }
}
