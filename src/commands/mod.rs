//! The generate pipeline behind the `welcomegen` command.
//!
//! 1. Resolve the project root and load the config
//! 2. Read and parse the metadata document
//! 3. Extract the release notes for the requested version
//! 4. Check demo scripts per `demo_policy`
//! 5. Render the declarations or definitions and print them on stdout

use crate::appdata::read_release_notes;
use crate::cli::Cli;
use crate::config::Config;
use crate::context::GenerateContext;
use crate::demo::check_demos;
use crate::emit::{OutputMode, render};
use crate::error::{Result, WelcomeError};
use std::io::Write;
use std::path::PathBuf;


/// Inputs of one generator run, independent of the command line.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub version: String,
    pub mode: OutputMode,
    pub input: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub root: Option<PathBuf>,
}

impl From<&Cli> for GenerateOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            version: cli.release.clone(),
            mode: OutputMode::from_header_flag(cli.header),
            input: cli.input.clone(),
            config: cli.config.clone(),
            root: cli.root.clone(),
        }
    }
}

/// Execute the command: generate and print to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let output = generate(&GenerateOptions::from(cli))?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| WelcomeError::IoError {
            path: "<stdout>".to_string(),
            message: e.to_string(),
        })
}

/// Run the whole pipeline and return the generated text.
///
/// Reads the config and metadata files but writes nothing.
pub fn generate(options: &GenerateOptions) -> Result<String> {
    let ctx = match &options.root {
        Some(root) => GenerateContext::resolve_from(root),
        None => GenerateContext::resolve()?,
    };

    let config = match &options.config {
        // An explicit config file must exist.
        Some(path) => {
            let ctx = ctx.clone().with_config_path(path);
            Config::load(&ctx.config_path)?
        }
        None => Config::load_or_default(&ctx.config_path)?,
    };

    let appdata_path = ctx.appdata_path(&config, options.input.as_deref());
    let source = appdata_path.display().to_string();
    tracing::debug!(path = %source, version = %options.version, "reading metadata");

    let xml = std::fs::read_to_string(&appdata_path).map_err(|e| WelcomeError::IoError {
        path: source.clone(),
        message: e.to_string(),
    })?;

    let notes = read_release_notes(&xml, &source, &options.version)?;
    check_demos(&notes, config.demo_policy)?;

    tracing::info!(
        version = %options.version,
        mode = ?options.mode,
        items = notes.items.len(),
        paragraphs = notes.introduction.len(),
        "generated welcome dialog data"
    );

    Ok(render(&notes, options.mode))
}
