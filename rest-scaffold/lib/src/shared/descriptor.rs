use serde::{Deserialize, Serialize};

use crate::shared::SourceLanguage;

/// Type text used when a field declares no type.
pub const UNRESOLVED_TYPE: &str = "null";

/// A single field of the entity class, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    /// The declared type exactly as written in the source.
    pub type_text: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
        }
    }

    /// Returns true when the source declared no type for this field.
    pub fn is_unresolved(&self) -> bool {
        self.type_text == UNRESOLVED_TYPE
    }
}

/// The introspected entity class every artifact is generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub name: String,
    /// Dotted name, e.g. `com.app.domain.Order`.
    pub qualified_name: String,
    pub fields: Vec<FieldDescriptor>,
    pub language: SourceLanguage,
}

impl ClassDescriptor {
    pub fn new(
        name: impl Into<String>,
        qualified_name: impl Into<String>,
        fields: Vec<FieldDescriptor>,
        language: SourceLanguage,
    ) -> Self {
        Self {
            name: name.into(),
            qualified_name: qualified_name.into(),
            fields,
            language,
        }
    }

    /// Fields whose type degraded to [`UNRESOLVED_TYPE`].
    pub fn unresolved_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|field| field.is_unresolved())
    }
}
