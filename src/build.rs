mod builder;
mod data;
mod fields;
mod markdown;
pub mod pipeline;
mod render;

pub use builder::{BuildError, Builder, MissingInput};
