//! All-or-nothing insertion of generated artifacts into a [`ProjectTree`].
//!
//! Artifacts are rendered before a transaction is opened, so the only
//! failures left are collisions (caught during planning, before anything is
//! written) and I/O errors during the commit. On an I/O error the files the
//! transaction already created are removed again; directories are kept.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{info, warn};

use crate::error::{Result, ScaffoldError};
use crate::generate::{ArtifactKind, GeneratedArtifact};
use crate::package::{ProjectTree, ensure_subdirectories};

/// What to do when a generated file already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CollisionPolicy {
    /// Abort before writing anything.
    #[default]
    Error,
    /// Leave the existing file alone.
    Skip,
    /// Replace the existing file.
    Overwrite,
}

/// Outcome for a single artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ArtifactStatus {
    /// Would be created or overwritten; nothing was written (dry run).
    Planned,
    Created,
    Overwritten,
    Skipped,
}

/// Where an artifact went and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactOutcome {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub status: ArtifactStatus,
}

#[derive(Debug)]
struct PlannedWrite {
    artifact: GeneratedArtifact,
    path: PathBuf,
    exists: bool,
    skip: bool,
}

/// A buffered set of artifacts to insert below one base directory.
#[derive(Debug)]
pub struct Transaction {
    base_directory: Option<PathBuf>,
    policy: CollisionPolicy,
    writes: Vec<PlannedWrite>,
}

impl Transaction {
    /// Plans the insertion of `artifacts` below `base_directory`.
    ///
    /// ## Errors
    /// With [`CollisionPolicy::Error`], returns
    /// [`ScaffoldError::ArtifactExists`] naming every target that already
    /// exists.
    pub fn plan<T: ProjectTree + ?Sized>(
        tree: &T,
        base_directory: Option<&Path>,
        artifacts: Vec<GeneratedArtifact>,
        policy: CollisionPolicy,
    ) -> Result<Self> {
        let writes: Vec<PlannedWrite> = artifacts
            .into_iter()
            .map(|artifact| {
                let relative = Path::new(&artifact.relative_path).join(&artifact.file_name);
                match base_directory {
                    Some(base) => {
                        let path = base.join(&relative);
                        let exists = tree.file_exists(&path);
                        let skip = exists && policy == CollisionPolicy::Skip;
                        PlannedWrite {
                            artifact,
                            path,
                            exists,
                            skip,
                        }
                    }
                    None => PlannedWrite {
                        artifact,
                        path: relative,
                        exists: false,
                        skip: true,
                    },
                }
            })
            .collect();

        if policy == CollisionPolicy::Error {
            let collisions: Vec<PathBuf> = writes
                .iter()
                .filter(|write| write.exists)
                .map(|write| write.path.clone())
                .collect();
            if !collisions.is_empty() {
                return Err(ScaffoldError::ArtifactExists { paths: collisions });
            }
        }

        if base_directory.is_none() {
            warn!("source file has no base directory, nothing will be written");
        }

        Ok(Self {
            base_directory: base_directory.map(Path::to_path_buf),
            policy,
            writes,
        })
    }

    /// The outcome each artifact would have, without writing anything.
    pub fn preview(&self) -> Vec<ArtifactOutcome> {
        self.writes
            .iter()
            .map(|write| ArtifactOutcome {
                kind: write.artifact.kind,
                path: write.path.clone(),
                status: if write.skip {
                    ArtifactStatus::Skipped
                } else {
                    ArtifactStatus::Planned
                },
            })
            .collect()
    }

    pub fn artifacts(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        self.writes.iter().map(|write| &write.artifact)
    }

    /// Writes every planned artifact.
    ///
    /// ## Errors
    /// Returns [`ScaffoldError::CommitFailed`] if a directory or file cannot
    /// be written; files created earlier in this commit are removed first.
    pub fn commit<T: ProjectTree + ?Sized>(self, tree: &mut T) -> Result<Vec<ArtifactOutcome>> {
        let mut outcomes = Vec::with_capacity(self.writes.len());
        let mut created: Vec<PathBuf> = Vec::new();

        for write in &self.writes {
            if write.skip {
                outcomes.push(ArtifactOutcome {
                    kind: write.artifact.kind,
                    path: write.path.clone(),
                    status: ArtifactStatus::Skipped,
                });
                continue;
            }

            match insert(tree, self.base_directory.as_deref(), write) {
                Ok(path) => {
                    let status = if write.exists {
                        ArtifactStatus::Overwritten
                    } else {
                        created.push(path.clone());
                        ArtifactStatus::Created
                    };
                    outcomes.push(ArtifactOutcome {
                        kind: write.artifact.kind,
                        path,
                        status,
                    });
                }
                Err(source) => {
                    let rolled_back = rollback(tree, &created);
                    return Err(ScaffoldError::CommitFailed {
                        rolled_back,
                        source: Box::new(source),
                    });
                }
            }
        }

        info!(
            written = created.len(),
            policy = %self.policy,
            "committed generated artifacts"
        );
        Ok(outcomes)
    }
}

fn insert<T: ProjectTree + ?Sized>(
    tree: &mut T,
    base_directory: Option<&Path>,
    write: &PlannedWrite,
) -> Result<PathBuf> {
    let directory = ensure_subdirectories(tree, base_directory, &write.artifact.relative_path)?
        .unwrap_or_else(|| write.path.parent().map(Path::to_path_buf).unwrap_or_default());
    tree.insert_text_file(&directory, &write.artifact.file_name, &write.artifact.content)
}

fn rollback<T: ProjectTree + ?Sized>(tree: &mut T, created: &[PathBuf]) -> usize {
    let mut removed = 0;
    for path in created.iter().rev() {
        match tree.remove_file(path) {
            Ok(()) => removed += 1,
            Err(error) => warn!(path = %path.display(), %error, "could not roll back file"),
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{GenerationContext, generate_all};
    use crate::package::MemoryProjectTree;
    use crate::shared::{ClassDescriptor, FieldDescriptor, SourceLanguage};

    const BASE: &str = "/proj/src/main/java/com/app";

    fn artifacts() -> Vec<GeneratedArtifact> {
        let class = ClassDescriptor::new(
            "Order",
            "com.app.domain.Order",
            vec![FieldDescriptor::new("id", "Long")],
            SourceLanguage::Java,
        );
        generate_all(&class, &GenerationContext::new("com.app", Some(PathBuf::from(BASE))))
    }

    /// Fails every insert after the first `allowed` ones.
    struct FlakyTree {
        inner: MemoryProjectTree,
        allowed: usize,
    }

    impl ProjectTree for FlakyTree {
        fn find_subdirectory(&self, dir: &Path, name: &str) -> Option<PathBuf> {
            self.inner.find_subdirectory(dir, name)
        }

        fn create_subdirectory(&mut self, dir: &Path, name: &str) -> Result<PathBuf> {
            self.inner.create_subdirectory(dir, name)
        }

        fn file_exists(&self, path: &Path) -> bool {
            self.inner.file_exists(path)
        }

        fn insert_text_file(&mut self, dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
            if self.allowed == 0 {
                return Err(ScaffoldError::Write {
                    path: dir.join(file_name),
                    source: std::io::Error::other("disk full"),
                });
            }
            self.allowed -= 1;
            self.inner.insert_text_file(dir, file_name, content)
        }

        fn remove_file(&mut self, path: &Path) -> Result<()> {
            self.inner.remove_file(path)
        }
    }

    #[test]
    fn commit_writes_all_files() {
        let mut tree = MemoryProjectTree::new().with_directory(BASE);
        let transaction =
            Transaction::plan(&tree, Some(Path::new(BASE)), artifacts(), CollisionPolicy::Error)
                .expect("plan");

        let outcomes = transaction.commit(&mut tree).expect("commit");

        assert_eq!(outcomes.len(), 7);
        assert!(outcomes.iter().all(|outcome| outcome.status == ArtifactStatus::Created));
        assert!(tree.file(Path::new(&format!("{BASE}/data/access/OrderRepository.java"))).is_some());
        assert!(tree.file(Path::new(&format!("{BASE}/web/model/OrderSearchRequest.java"))).is_some());
    }

    #[test]
    fn error_policy_aborts_before_writing() {
        let existing = format!("{BASE}/service/model/OrderDto.java");
        let tree = MemoryProjectTree::new()
            .with_directory(BASE)
            .with_file(&existing, "// hand written");

        let error = Transaction::plan(&tree, Some(Path::new(BASE)), artifacts(), CollisionPolicy::Error)
            .expect_err("collision");

        match error {
            ScaffoldError::ArtifactExists { paths } => {
                assert_eq!(paths, vec![PathBuf::from(&existing)]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(tree.files().count(), 1);
    }

    #[test]
    fn skip_policy_keeps_existing_files() {
        let existing = format!("{BASE}/service/model/OrderDto.java");
        let mut tree = MemoryProjectTree::new()
            .with_directory(BASE)
            .with_file(&existing, "// hand written");

        let outcomes = Transaction::plan(&tree, Some(Path::new(BASE)), artifacts(), CollisionPolicy::Skip)
            .expect("plan")
            .commit(&mut tree)
            .expect("commit");

        let dto = outcomes
            .iter()
            .find(|outcome| outcome.kind == ArtifactKind::Dto)
            .expect("dto outcome");
        assert_eq!(dto.status, ArtifactStatus::Skipped);
        assert_eq!(tree.file(Path::new(&existing)), Some("// hand written"));
        assert_eq!(tree.files().count(), 7);
    }

    #[test]
    fn overwrite_policy_replaces_existing_files() {
        let existing = format!("{BASE}/service/model/OrderDto.java");
        let mut tree = MemoryProjectTree::new()
            .with_directory(BASE)
            .with_file(&existing, "// hand written");

        let outcomes =
            Transaction::plan(&tree, Some(Path::new(BASE)), artifacts(), CollisionPolicy::Overwrite)
                .expect("plan")
                .commit(&mut tree)
                .expect("commit");

        assert!(outcomes.iter().any(|outcome| outcome.status == ArtifactStatus::Overwritten));
        assert!(
            tree.file(Path::new(&existing))
                .is_some_and(|content| content.contains("public class OrderDto"))
        );
    }

    #[test]
    fn failed_commit_rolls_back_created_files() {
        let mut tree = FlakyTree {
            inner: MemoryProjectTree::new().with_directory(BASE),
            allowed: 3,
        };

        let transaction =
            Transaction::plan(&tree, Some(Path::new(BASE)), artifacts(), CollisionPolicy::Error)
                .expect("plan");
        let error = transaction.commit(&mut tree).expect_err("fourth insert fails");

        assert!(matches!(error, ScaffoldError::CommitFailed { rolled_back: 3, .. }));
        assert_eq!(tree.inner.files().count(), 0);
    }

    #[test]
    fn missing_base_directory_writes_nothing() {
        let mut tree = MemoryProjectTree::new();
        let transaction = Transaction::plan(&tree, None, artifacts(), CollisionPolicy::Error)
            .expect("plan");

        assert!(transaction
            .preview()
            .iter()
            .all(|outcome| outcome.status == ArtifactStatus::Skipped));

        let outcomes = transaction.commit(&mut tree).expect("commit");
        assert_eq!(outcomes.len(), 7);
        assert_eq!(tree.files().count(), 0);
    }
}
