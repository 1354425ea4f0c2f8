use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod build;
mod commands;
mod config;

/// Build index.html from data.json and template.html
#[derive(Parser)]
#[command(version, about)]
struct BuildArgs {
    /// The configuration file (defaults to sitegen.yaml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// The site data file (JSON, or YAML by extension)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// The page template
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// The generated page
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Markdown extensions to enable instead of the default "extra" preset
    #[arg(short = 'x', long = "extension", value_delimiter = ',')]
    extensions: Vec<String>,

    /// Log build progress
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

fn main() {
    let args = BuildArgs::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match commands::build::run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}
