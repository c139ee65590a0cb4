use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Trailing path components that mark a conventional source root, most
/// specific first.
const CONVENTIONAL_ROOTS: &[&[&str]] = &[
    &["src", "main", "java"],
    &["src", "main", "kotlin"],
    &["src", "test", "java"],
    &["src", "test", "kotlin"],
    &["src"],
];

/// A read-only snapshot of the project's source roots.
///
/// Package names are computed relative to these directories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRoots {
    roots: Vec<PathBuf>,
}

impl SourceRoots {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Guesses the source root of `file` from conventional layouts such as
    /// `src/main/java`. The nearest matching ancestor wins.
    pub fn detect(file: &Path) -> Self {
        let root = file.ancestors().skip(1).find(|ancestor| {
            CONVENTIONAL_ROOTS
                .iter()
                .any(|suffix| ends_with_components(ancestor, suffix))
        });

        debug!(file = %file.display(), root = ?root, "detected source root");
        Self::new(root.map(Path::to_path_buf))
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.roots.iter().map(PathBuf::as_path)
    }

    /// Computes the dotted package of `directory`: the path below the
    /// nearest enclosing source root with separators replaced by dots.
    ///
    /// Returns an empty string when `directory` is `None`, is not below any
    /// root, or is a root itself.
    pub fn package_name_of(&self, directory: Option<&Path>) -> String {
        let Some(directory) = directory else {
            return String::new();
        };

        let nearest = self
            .roots
            .iter()
            .filter_map(|root| directory.strip_prefix(root).ok().map(|relative| (root, relative)))
            .max_by_key(|(root, _)| root.components().count());

        match nearest {
            Some((_, relative)) => relative
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("."),
            None => String::new(),
        }
    }
}

fn ends_with_components(path: &Path, suffix: &[&str]) -> bool {
    let mut components = path.components().rev();
    suffix.iter().rev().all(|expected| {
        components
            .next()
            .is_some_and(|component| component.as_os_str() == *expected)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_the_source_root_prefix() {
        let roots = SourceRoots::new(["/proj/src/main/java"]);

        assert_eq!(
            roots.package_name_of(Some(Path::new("/proj/src/main/java/com/x"))),
            "com.x"
        );
    }

    #[test]
    fn outside_any_root_is_empty() {
        let roots = SourceRoots::new(["/proj/src/main/java"]);

        assert_eq!(roots.package_name_of(Some(Path::new("/elsewhere/com/x"))), "");
        assert_eq!(roots.package_name_of(Some(Path::new("/proj/src/main/javax/com"))), "");
        assert_eq!(roots.package_name_of(None), "");
    }

    #[test]
    fn the_root_itself_has_no_package() {
        let roots = SourceRoots::new(["/proj/src/main/java"]);

        assert_eq!(roots.package_name_of(Some(Path::new("/proj/src/main/java"))), "");
    }

    #[test]
    fn nearest_enclosing_root_wins() {
        let nested = SourceRoots::new(["/proj/src", "/proj/src/main/java"]);
        let reversed = SourceRoots::new(["/proj/src/main/java", "/proj/src"]);
        let directory = Path::new("/proj/src/main/java/com/x");

        assert_eq!(nested.package_name_of(Some(directory)), "com.x");
        assert_eq!(reversed.package_name_of(Some(directory)), "com.x");
        assert_eq!(
            nested.package_name_of(Some(Path::new("/proj/src/tools/gen"))),
            "tools.gen"
        );
    }

    #[test]
    fn detects_conventional_layouts() {
        let java = SourceRoots::detect(Path::new("/proj/src/main/java/com/app/domain/Order.java"));
        assert_eq!(java, SourceRoots::new(["/proj/src/main/java"]));

        let kotlin = SourceRoots::detect(Path::new("/proj/src/test/kotlin/com/app/Fixture.kt"));
        assert_eq!(kotlin, SourceRoots::new(["/proj/src/test/kotlin"]));

        let flat = SourceRoots::detect(Path::new("/proj/src/com/app/Order.java"));
        assert_eq!(flat, SourceRoots::new(["/proj/src"]));

        assert!(SourceRoots::detect(Path::new("/tmp/Order.java")).is_empty());
    }
}
