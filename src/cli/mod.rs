//! CLI argument parsing for welcomegen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The generation itself lives in the `commands` module.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Generate welcome dialog release-note data from AppStream metadata.
///
/// Finds the `<release>` entry matching VERSION in the metadata document and
/// prints C source for the welcome dialog on stdout. Redirect the output to
/// `welcome-dialog-data.c` (or `.h` with `--header`).
#[derive(Parser, Debug)]
#[command(name = "welcomegen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Release version to look up (e.g. "3.0.0").
    ///
    /// A version missing from the document is not an error: the generated
    /// arrays are simply empty.
    #[arg(value_name = "VERSION")]
    pub release: String,

    /// Emit extern declarations (header) instead of definitions.
    #[arg(long)]
    pub header: bool,

    /// Metadata document to read. Overrides `appdata_path` from the config.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Config file (default: welcomegen.yaml in the project root, if present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project root for resolving relative paths (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_version_only() {
        let cli = Cli::try_parse_from(["welcomegen", "3.0.0"]).unwrap();

        assert_eq!(cli.release, "3.0.0");
        assert!(!cli.header);
        assert!(cli.input.is_none());
        assert!(cli.config.is_none());
        assert!(cli.root.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_header_flag_and_paths() {
        let cli = Cli::try_parse_from([
            "welcomegen",
            "--header",
            "--input",
            "meta.xml",
            "--config",
            "gen.yaml",
            "--root",
            "/src/gimp",
            "-vv",
            "2.99.18",
        ])
        .unwrap();

        assert_eq!(cli.release, "2.99.18");
        assert!(cli.header);
        assert_eq!(cli.input, Some(PathBuf::from("meta.xml")));
        assert_eq!(cli.config, Some(PathBuf::from("gen.yaml")));
        assert_eq!(cli.root, Some(PathBuf::from("/src/gimp")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn missing_version_is_rejected() {
        let err = Cli::try_parse_from(["welcomegen", "--header"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
