//! Configuration loading from files.
//!
//! A config file is optional. Relative paths inside it are resolved against
//! the directory holding the file.

use std::path::{Path, PathBuf};

use super::{BuildConfig, ConfigError, DEFAULT_CONFIG_FILE};

impl BuildConfig {
    /// Load the config named on the command line, defaulting to `sitegen.yaml`.
    ///
    /// An explicitly named file must exist. When none is named and
    /// `sitegen.yaml` is absent from `base_path`, the defaults are used,
    /// resolved against `base_path`.
    pub fn load_from_arg(
        config_file: Option<&Path>,
        base_path: &Path,
    ) -> Result<Self, ConfigError> {
        match config_file {
            Some(config_file) => {
                Self::load_from_file(&resolve_path(base_path, config_file.to_path_buf()))
            }
            None => {
                let config_file = base_path.join(DEFAULT_CONFIG_FILE);
                if config_file.exists() {
                    Self::load_from_file(&config_file)
                } else {
                    Ok(Self::default().resolve_against(base_path))
                }
            }
        }
    }

    /// Load the config from a file path
    pub(crate) fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;

        let config: BuildConfig = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;

        let base_path = path.parent().unwrap_or(Path::new(""));
        Ok(config.resolve_against(base_path))
    }

    /// Resolve relative paths against an explicit base directory.
    pub fn resolve_against(self, base_path: &Path) -> Self {
        Self {
            data: resolve_path(base_path, self.data),
            template: resolve_path(base_path, self.template),
            output: resolve_path(base_path, self.output),
            markdown: self.markdown,
        }
    }
}

fn resolve_path(base_path: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() {
        base_path.join(path)
    } else {
        path
    }
}
