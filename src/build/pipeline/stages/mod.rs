//! Default pipeline stages.
//!
//! The standard site processing pipeline consists of:
//!
//! 1. **LoadStage** - Read and parse the site data file
//! 2. **MarkdownStage** - Convert the markdown fields to HTML
//! 3. **TemplateStage** - Render the page template with the site data
//! 4. **WriteStage** - Write the final HTML to the output file

mod load;
mod markdown;
mod template;
mod write;

pub use load::LoadStage;
pub use markdown::MarkdownStage;
pub use template::TemplateStage;
pub use write::WriteStage;
