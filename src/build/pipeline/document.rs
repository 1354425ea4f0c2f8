//! The site document carried through the pipeline.

use serde_json::Value;

/// The site being built.
///
/// State evolves through pipeline stages:
///
/// 1. Initially: everything empty
/// 2. After load: `data` = site data as parsed from the data file
/// 3. After markdown: markdown fields in `data` replaced with HTML
/// 4. After template: `output_html` = final page HTML
#[derive(Debug, Default)]
pub struct SiteDocument {
    /// Site data, `None` until the load stage populates it.
    pub data: Option<Value>,

    /// Number of markdown fields rendered by the markdown stage.
    pub rendered_fields: usize,

    /// Final HTML output after template rendering.
    ///
    /// None until the template stage populates it.
    pub output_html: Option<String>,

    /// Bytes written by the write stage.
    pub bytes_written: usize,
}

impl SiteDocument {
    /// Create an empty document, ready for the load stage.
    pub fn new() -> Self {
        Self::default()
    }
}
