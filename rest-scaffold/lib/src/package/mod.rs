pub mod project_tree;
pub mod source_roots;

pub use project_tree::{FsProjectTree, MemoryProjectTree, ProjectTree, ensure_subdirectories};
pub use source_roots::SourceRoots;
