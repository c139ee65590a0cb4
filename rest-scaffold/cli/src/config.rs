//! Optional `rest-scaffold.toml` project configuration.
//!
//! ```toml
//! source-roots = ["src/main/java", "src/main/kotlin"]
//! on-collision = "skip"
//! strict-types = true
//! dry-run = false
//! ```
//!
//! Relative source roots are resolved against the directory holding the
//! file. Command-line flags take precedence over every value here.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Context, Result};
use rest_scaffold_lib::CollisionPolicy;
use serde::Deserialize;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "rest-scaffold.toml";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub source_roots: Vec<PathBuf>,
    pub on_collision: Option<CollisionPolicy>,
    pub strict_types: Option<bool>,
    pub dry_run: Option<bool>,
}

impl FileConfig {
    /// Reads and parses a config file, absolutizing its source roots.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config `{}`", path.display()))?;
        let mut config: Self = toml::from_str(&text)
            .wrap_err_with(|| format!("Invalid config `{}`", path.display()))?;

        if let Some(dir) = path.parent() {
            config.source_roots = config
                .source_roots
                .into_iter()
                .map(|root| if root.is_absolute() { root } else { dir.join(root) })
                .collect();
        }

        debug!(path = %path.display(), ?config, "loaded config file");
        Ok(config)
    }

    /// Loads `explicit` if given, otherwise the nearest config file at or
    /// above `start`. No file found yields the defaults.
    pub fn discover(explicit: Option<&Path>, start: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match find_config(start) {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }
}

/// Walks from `start` up to the filesystem root looking for
/// [`CONFIG_FILE_NAME`].
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kebab_case_keys() {
        let config: FileConfig = toml::from_str(
            "source-roots = [\"src/main/java\"]\non-collision = \"overwrite\"\nstrict-types = true\n",
        )
        .expect("parse");

        assert_eq!(config.source_roots, vec![PathBuf::from("src/main/java")]);
        assert_eq!(config.on_collision, Some(CollisionPolicy::Overwrite));
        assert_eq!(config.strict_types, Some(true));
        assert_eq!(config.dry_run, None);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(toml::from_str::<FileConfig>("overwrite = true\n").is_err());
    }

    #[test]
    fn discovers_nearest_file_and_resolves_roots() {
        let temp = tempfile::tempdir().expect("tempdir");
        let nested = temp.path().join("src/main/java/com/app/domain");
        std::fs::create_dir_all(&nested).expect("create dirs");
        std::fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "source-roots = [\"src/main/java\"]\n",
        )
        .expect("write config");

        let config = FileConfig::discover(None, &nested).expect("discover");

        assert_eq!(config.source_roots, vec![temp.path().join("src/main/java")]);
    }
}
