mod descriptor;
mod language;

pub use descriptor::{ClassDescriptor, FieldDescriptor, UNRESOLVED_TYPE};
pub use language::SourceLanguage;
