use std::path::Path;

use crate::{
    BuildArgs,
    build::{BuildError, Builder, MissingInput},
    config::{BuildConfig, ConfigError, MarkdownConfig},
};

/// Build the site page.
///
/// Returns `Ok(false)` when the data file or the template does not exist,
/// after telling the user which file is missing. Any other failure is an
/// error.
pub fn run(args: &BuildArgs) -> Result<bool, anyhow::Error> {
    let cwd = std::env::current_dir().map_err(ConfigError::CwdFailure)?;
    let config = BuildConfig::load_from_arg(args.config.as_deref(), &cwd)?;
    let config = apply_overrides(config, args, &cwd);

    match Builder::new(config).build() {
        Ok(result) => {
            println!("Successfully generated {}", result.output_path.display());
            tracing::info!(
                fields = result.rendered_fields,
                bytes = result.bytes_written,
                "build finished"
            );
            Ok(true)
        }
        Err(err) => match missing_input_message(&err) {
            Some(message) => {
                eprintln!("{message}");
                Ok(false)
            }
            None => Err(err.into()),
        },
    }
}

/// Command-line paths win over the config file and resolve against `cwd`.
fn apply_overrides(config: BuildConfig, args: &BuildArgs, cwd: &Path) -> BuildConfig {
    let resolve = |path: &Path| cwd.join(path);
    BuildConfig {
        data: args.data.as_deref().map(resolve).unwrap_or(config.data),
        template: args.template.as_deref().map(resolve).unwrap_or(config.template),
        output: args.output.as_deref().map(resolve).unwrap_or(config.output),
        markdown: if args.extensions.is_empty() {
            config.markdown
        } else {
            MarkdownConfig {
                extensions: args.extensions.clone(),
            }
        },
    }
}

fn missing_input_message(err: &BuildError) -> Option<String> {
    let missing = err.missing_input()?;
    let path = missing.path();
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Some(match missing {
        MissingInput::DataFile(_) => format!(
            "Error: {name} not found. Please create a {name} file. (looked in {})",
            path.display()
        ),
        MissingInput::TemplateFile(_) => {
            format!("Error: {name} not found. (looked in {})", path.display())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn no_args() -> BuildArgs {
        BuildArgs {
            config: None,
            data: None,
            template: None,
            output: None,
            extensions: vec![],
            verbose: false,
        }
    }

    fn args_in(dir: &Path) -> BuildArgs {
        BuildArgs {
            data: Some(dir.join("data.json")),
            template: Some(dir.join("template.html")),
            output: Some(dir.join("index.html")),
            ..no_args()
        }
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let config = BuildConfig::default().resolve_against(Path::new("/srv/site"));
        let config = apply_overrides(config, &no_args(), Path::new("/home/ada"));
        assert_eq!(config.data, PathBuf::from("/srv/site/data.json"));
        assert_eq!(config.template, PathBuf::from("/srv/site/template.html"));
        assert_eq!(config.output, PathBuf::from("/srv/site/index.html"));
        assert_eq!(config.markdown, MarkdownConfig::default());
    }

    #[test]
    fn test_overrides_resolve_against_cwd() {
        let args = BuildArgs {
            data: Some(PathBuf::from("site.yaml")),
            output: Some(PathBuf::from("/var/www/index.html")),
            extensions: vec!["tables".to_string(), "strikethrough".to_string()],
            ..no_args()
        };
        let config = BuildConfig::default().resolve_against(Path::new("/srv/site"));
        let config = apply_overrides(config, &args, Path::new("/home/ada"));
        assert_eq!(config.data, PathBuf::from("/home/ada/site.yaml"));
        assert_eq!(config.template, PathBuf::from("/srv/site/template.html"));
        assert_eq!(config.output, PathBuf::from("/var/www/index.html"));
        assert_eq!(config.markdown.extensions, vec!["tables", "strikethrough"]);
    }

    #[test]
    fn test_run_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_in(dir.path());
        std::fs::write(dir.path().join("data.json"), r#"{"basics": {"bio": "**Hi**"}}"#).unwrap();
        std::fs::write(dir.path().join("template.html"), "<p>{{ basics.bio }}</p>").unwrap();

        assert!(run(&args).unwrap());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("index.html")).unwrap(),
            "<p><p><strong>Hi</strong></p></p>"
        );
    }

    #[test]
    fn test_run_with_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("sitegen.yaml");
        std::fs::write(
            &config_path,
            "data: content/site.yaml
output: public/index.html
markdown:
  extensions: [strikethrough]
",
        )
        .unwrap();
        std::fs::create_dir_all(dir.path().join("content")).unwrap();
        std::fs::write(dir.path().join("content/site.yaml"), r#"basics:
  bio: "~~old~~ new"
"#).unwrap();
        std::fs::write(dir.path().join("template.html"), "{{ basics.bio }}").unwrap();
        let args = BuildArgs {
            config: Some(config_path),
            ..no_args()
        };

        assert!(run(&args).unwrap());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("public/index.html")).unwrap(),
            "<p><del>old</del> new</p>"
        );
    }

    #[test]
    fn test_run_with_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = BuildArgs {
            config: Some(dir.path().join("sitegen.yaml")),
            ..no_args()
        };

        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("sitegen.yaml"));
    }

    #[test]
    fn test_run_reports_missing_data() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_in(dir.path());
        std::fs::write(dir.path().join("template.html"), "x").unwrap();

        assert!(!run(&args).unwrap());
        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn test_run_reports_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_in(dir.path());
        std::fs::write(dir.path().join("data.json"), "{}").unwrap();

        assert!(!run(&args).unwrap());
        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn test_missing_input_messages_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = BuildConfig::default().resolve_against(dir.path());

        let err = Builder::new(config.clone()).build().err().unwrap();
        let message = missing_input_message(&err).unwrap();
        assert!(message.starts_with("Error: data.json not found. Please create a data.json file."));

        std::fs::write(dir.path().join("data.json"), "{}").unwrap();
        let err = Builder::new(config).build().err().unwrap();
        let message = missing_input_message(&err).unwrap();
        assert!(message.starts_with("Error: template.html not found."));
    }

    #[test]
    fn test_malformed_data_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_in(dir.path());
        std::fs::write(dir.path().join("data.json"), "[").unwrap();
        std::fs::write(dir.path().join("template.html"), "x").unwrap();

        assert!(run(&args).is_err());
    }
}
