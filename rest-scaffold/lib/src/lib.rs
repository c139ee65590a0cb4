pub mod config;
pub mod error;
pub mod file;
pub mod generate;
pub mod message;
pub mod package;
pub mod scaffolder;
pub mod shared;
pub mod transaction;

pub use config::ScaffoldConfig;
pub use error::{Result, ScaffoldError};
pub use file::{ClassDeclaration, SourceFile};
pub use generate::{ArtifactKind, GeneratedArtifact, GenerationContext, generate_all};
pub use message::{MessageLevel, UserMessage};
pub use package::{FsProjectTree, MemoryProjectTree, ProjectTree, SourceRoots, ensure_subdirectories};
pub use scaffolder::{GenerationReport, GenerationState, Scaffolder};
pub use shared::*;
pub use transaction::{ArtifactOutcome, ArtifactStatus, CollisionPolicy, Transaction};
