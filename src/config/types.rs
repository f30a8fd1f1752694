//! Config enums and their default value functions.

use serde::Deserialize;

/// What to do with a demo script that does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DemoPolicy {
    /// Log a warning and keep going (default).
    #[default]
    Warn,
    /// Abort with a demo validation error.
    Fail,
    /// Do not check demo scripts at all.
    Ignore,
}

/// Default location of the metadata document, relative to the project root.
pub const DEFAULT_APPDATA_PATH: &str = "desktop/org.gimp.GIMP.appdata.xml.in.in";

pub(super) fn default_appdata_path() -> String {
    DEFAULT_APPDATA_PATH.to_string()
}
