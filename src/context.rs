//! Path resolution for welcomegen.
//!
//! All paths the generator reads are resolved here, once, from the project
//! root: the config file and the metadata document. Nothing else in the
//! crate looks at the current directory.

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{Result, WelcomeError};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved paths for one generator run. All paths are absolute when the
/// project root is.
#[derive(Debug, Clone)]
pub struct GenerateContext {
    /// Directory relative paths are resolved against.
    pub project_root: PathBuf,

    /// Config file location (may not exist).
    pub config_path: PathBuf,
}

impl GenerateContext {
    /// Resolve the context from the current working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(GenerateContext)` - Successfully resolved context
    /// * `Err(WelcomeError::UserError)` - If the working directory is unavailable
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            WelcomeError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::resolve_from(cwd))
    }

    /// Resolve the context from a specific project root.
    pub fn resolve_from<P: AsRef<Path>>(project_root: P) -> Self {
        let project_root = project_root.as_ref().to_path_buf();
        let config_path = project_root.join(DEFAULT_CONFIG_FILE);

        Self {
            project_root,
            config_path,
        }
    }

    /// Use an explicit config file instead of `welcomegen.yaml` in the root.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = self.resolve_path(path);
        self
    }

    /// Resolve `path` against the project root unless it is absolute.
    pub fn resolve_path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }

    /// Metadata document path: the `--input` override, else the config value.
    pub fn appdata_path(&self, config: &Config, input: Option<&Path>) -> PathBuf {
        match input {
            Some(path) => self.resolve_path(path),
            None => self.resolve_path(&config.appdata_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_from_uses_default_config_file() {
        let ctx = GenerateContext::resolve_from("/project");

        assert_eq!(ctx.project_root, PathBuf::from("/project"));
        assert_eq!(ctx.config_path, PathBuf::from("/project/welcomegen.yaml"));
    }

    #[test]
    fn test_explicit_config_path_is_resolved() {
        let ctx = GenerateContext::resolve_from("/project").with_config_path("conf/gen.yaml");
        assert_eq!(ctx.config_path, PathBuf::from("/project/conf/gen.yaml"));

        let ctx = GenerateContext::resolve_from("/project").with_config_path("/etc/gen.yaml");
        assert_eq!(ctx.config_path, PathBuf::from("/etc/gen.yaml"));
    }

    #[test]
    fn test_appdata_path_defaults_to_config_value() {
        let ctx = GenerateContext::resolve_from("/project");
        let config = Config::default();

        assert_eq!(
            ctx.appdata_path(&config, None),
            PathBuf::from("/project/desktop/org.gimp.GIMP.appdata.xml.in.in")
        );
    }

    #[test]
    fn test_input_override_wins() {
        let ctx = GenerateContext::resolve_from("/project");
        let config = Config::default();

        assert_eq!(
            ctx.appdata_path(&config, Some(Path::new("other.xml"))),
            PathBuf::from("/project/other.xml")
        );
        assert_eq!(
            ctx.appdata_path(&config, Some(Path::new("/tmp/abs.xml"))),
            PathBuf::from("/tmp/abs.xml")
        );
    }

    #[test]
    fn test_resolve_uses_current_directory() {
        let ctx = GenerateContext::resolve().unwrap();
        assert_eq!(ctx.project_root, env::current_dir().unwrap());
    }
}
