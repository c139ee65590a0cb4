mod java;
mod kotlin;
pub mod source_file;

pub use source_file::{ClassDeclaration, SourceFile};
