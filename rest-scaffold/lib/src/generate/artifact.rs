use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::package::SourceRoots;

/// The seven generated artifacts, in generation order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Repository,
    Dto,
    Request,
    SearchRequest,
    Mapper,
    Service,
    Controller,
}

impl ArtifactKind {
    /// Suffix appended to the class name to form the generated type name.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Repository => "Repository",
            Self::Dto => "Dto",
            Self::Request => "Request",
            Self::SearchRequest => "SearchRequest",
            Self::Mapper => "Mapper",
            Self::Service => "Service",
            Self::Controller => "Controller",
        }
    }

    /// Package below the base package the artifact lives in.
    pub fn subpackage(&self) -> &'static str {
        match self {
            Self::Repository => "data.access",
            Self::Dto => "service.model",
            Self::Request | Self::SearchRequest => "web.model",
            Self::Mapper => "mapper",
            Self::Service => "service",
            Self::Controller => "web",
        }
    }

    /// Directory below the base directory, `/`-separated.
    pub fn relative_path(&self) -> &'static str {
        match self {
            Self::Repository => "data/access",
            Self::Dto => "service/model",
            Self::Request | Self::SearchRequest => "web/model",
            Self::Mapper => "mapper",
            Self::Service => "service",
            Self::Controller => "web",
        }
    }

    pub fn type_name(&self, class_name: &str) -> String {
        format!("{class_name}{}", self.suffix())
    }

    pub fn file_name(&self, class_name: &str) -> String {
        format!("{}.java", self.type_name(class_name))
    }
}

/// Naming and location state shared by every generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationContext {
    /// Dotted package of the base directory, possibly empty.
    pub base_package: String,
    /// The parent of the directory holding the entity source file.
    pub base_directory: Option<PathBuf>,
}

impl GenerationContext {
    pub fn new(base_package: impl Into<String>, base_directory: Option<PathBuf>) -> Self {
        Self {
            base_package: base_package.into(),
            base_directory,
        }
    }

    /// Derives the context for an entity source file: the base directory is
    /// the parent of the file's directory.
    pub fn for_source_file(file: &Path, roots: &SourceRoots) -> Self {
        let base_directory = file.parent().and_then(Path::parent).map(Path::to_path_buf);
        let base_package = roots.package_name_of(base_directory.as_deref());
        Self::new(base_package, base_directory)
    }

    /// `{base_package}.{subpackage}` for the given artifact.
    pub fn package_for(&self, kind: ArtifactKind) -> String {
        self.qualify(kind.subpackage())
    }

    pub(crate) fn qualify(&self, subpackage: &str) -> String {
        format!("{}.{subpackage}", self.base_package)
    }
}

/// One generated source file, not yet written anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub package: String,
    /// Directory below the base directory, `/`-separated.
    pub relative_path: String,
    pub file_name: String,
    pub content: String,
}

impl GeneratedArtifact {
    pub(crate) fn new(
        kind: ArtifactKind,
        class_name: &str,
        context: &GenerationContext,
        content: String,
    ) -> Self {
        Self {
            kind,
            package: context.package_for(kind),
            relative_path: kind.relative_path().to_string(),
            file_name: kind.file_name(class_name),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn subpackages_match_directories() {
        for kind in ArtifactKind::iter() {
            assert_eq!(kind.subpackage().replace('.', "/"), kind.relative_path());
        }
    }

    #[test]
    fn base_directory_is_the_grandparent_of_the_file() {
        let roots = SourceRoots::new(["/proj/src/main/java"]);
        let context = GenerationContext::for_source_file(
            Path::new("/proj/src/main/java/com/app/domain/Order.java"),
            &roots,
        );

        assert_eq!(context.base_package, "com.app");
        assert_eq!(
            context.base_directory.as_deref(),
            Some(Path::new("/proj/src/main/java/com/app"))
        );
        assert_eq!(context.package_for(ArtifactKind::Dto), "com.app.service.model");
    }

    #[test]
    fn kind_names() {
        assert_eq!(ArtifactKind::SearchRequest.file_name("Order"), "OrderSearchRequest.java");
        assert_eq!(ArtifactKind::SearchRequest.to_string(), "search-request");
    }
}
