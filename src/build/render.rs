use std::path::{Path, PathBuf};

use serde_json::Value;
use tera::{Context, Tera};

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("{} not found", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("failed to read template {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("template error")]
    Template(#[from] tera::Error),
}

/// The page renderer, wrapping Tera.
///
/// Holds exactly one template. Autoescaping is disabled because the markdown
/// fields already are HTML; templates escape plain values with `| escape`.
pub struct Renderer {
    tera: Tera,
    name: String,
}

impl Renderer {
    /// Load the page template from a file.
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let source = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RenderError::TemplateNotFound(path.to_path_buf()),
            _ => RenderError::Read(path.to_path_buf(), e),
        })?;

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "template".to_string());

        Self::from_source(&name, &source)
    }

    /// Build a renderer from template source held in memory.
    pub fn from_source(name: &str, source: &str) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(name, source)?;

        Ok(Self {
            tera,
            name: name.to_string(),
        })
    }

    /// Render the page, exposing each top-level key of `data` as a variable.
    pub fn render(&self, data: &Value) -> Result<String, RenderError> {
        let context = Context::from_serialize(data)?;
        Ok(self.tera.render(&self.name, &context)?)
    }
}
