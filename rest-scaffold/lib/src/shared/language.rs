use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tree_sitter::Language;

/// Source languages an entity class can be read from.
///
/// Java declarations are the "structural" class variant; Kotlin
/// declarations are the alternate-language variant. Both end up as the
/// same [`ClassDescriptor`](crate::ClassDescriptor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceLanguage {
    Java,
    Kotlin,
}

impl SourceLanguage {
    /// Returns a human-readable name for the language.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Java => "Java",
            Self::Kotlin => "Kotlin",
        }
    }

    /// Returns file extensions associated with the language.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Java => &["java"],
            Self::Kotlin => &["kt", "kts"],
        }
    }

    /// Maps a file extension to a supported language.
    pub fn from_extension(extension: &str) -> Option<Self> {
        [Self::Java, Self::Kotlin].into_iter().find(|language| {
            language
                .extensions()
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(extension))
        })
    }

    /// Detects the language from a filesystem path.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        Self::from_extension(extension)
    }

    /// Returns the tree-sitter language definition.
    pub fn tree_sitter_language(&self) -> Language {
        match self {
            Self::Java => tree_sitter_java::LANGUAGE.into(),
            Self::Kotlin => tree_sitter_kotlin_ng::LANGUAGE.into(),
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_language_from_extension() {
        assert_eq!(
            SourceLanguage::from_path(Path::new("Order.java")),
            Some(SourceLanguage::Java)
        );
        assert_eq!(
            SourceLanguage::from_path(Path::new("Order.kt")),
            Some(SourceLanguage::Kotlin)
        );
        assert_eq!(
            SourceLanguage::from_path(Path::new("build.gradle.KTS")),
            Some(SourceLanguage::Kotlin)
        );
        assert_eq!(SourceLanguage::from_path(Path::new("Order.scala")), None);
        assert_eq!(SourceLanguage::from_path(Path::new("Makefile")), None);
    }
}
