use std::path::PathBuf;

use thiserror::Error;

use crate::message::UserMessage;

/// Errors emitted by rest-scaffold operations.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("Failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported language for `{path}`")]
    UnsupportedLanguage { path: PathBuf },

    #[error("Failed to parse `{path}`")]
    ParseFailed { path: PathBuf },

    #[error("No class found in `{path}`")]
    NoClassFound { path: PathBuf },

    /// Only raised when strict type checking is enabled; otherwise the
    /// field degrades to the literal `null` type.
    #[error("Field `{field}` of `{class_name}` has no declared type")]
    UnresolvedFieldType { class_name: String, field: String },

    #[error("Failed to create directory `{path}`: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to overwrite existing file(s): {}", display_paths(.paths))]
    ArtifactExists { paths: Vec<PathBuf> },

    /// An insert failed part way through a commit. Files created earlier in
    /// the same transaction have already been removed.
    #[error("Commit failed after {rolled_back} file(s) were rolled back: {source}")]
    CommitFailed {
        rolled_back: usize,
        #[source]
        source: Box<ScaffoldError>,
    },
}

impl ScaffoldError {
    /// Maps the error onto the message the user is shown.
    ///
    /// Resolution failures (including files in a language we cannot read
    /// classes from) collapse into the "no class found" message; every
    /// other failure is surfaced with its own description.
    pub fn user_message(&self) -> UserMessage {
        match self {
            Self::NoFileSelected => UserMessage::NoFileSelected,
            Self::UnsupportedLanguage { .. } | Self::ParseFailed { .. } | Self::NoClassFound { .. } => {
                UserMessage::NoClassFound
            }
            other => UserMessage::Failed {
                reason: other.to_string(),
            },
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("`{}`", path.display()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience Result type for rest-scaffold operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_failures_share_the_no_class_message() {
        let unsupported = ScaffoldError::UnsupportedLanguage {
            path: PathBuf::from("notes.txt"),
        };
        let missing = ScaffoldError::NoClassFound {
            path: PathBuf::from("Empty.java"),
        };

        assert_eq!(unsupported.user_message(), UserMessage::NoClassFound);
        assert_eq!(missing.user_message(), UserMessage::NoClassFound);
        assert_eq!(
            ScaffoldError::NoFileSelected.user_message(),
            UserMessage::NoFileSelected
        );
    }

    #[test]
    fn artifact_exists_lists_every_path() {
        let error = ScaffoldError::ArtifactExists {
            paths: vec![PathBuf::from("a/OrderDto.java"), PathBuf::from("b/OrderMapper.java")],
        };

        let text = error.to_string();
        assert!(text.contains("`a/OrderDto.java`"));
        assert!(text.contains("`b/OrderMapper.java`"));
    }
}
