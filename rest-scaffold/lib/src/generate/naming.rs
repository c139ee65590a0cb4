//! Naming helpers shared by the templates.

use crate::generate::{ArtifactKind, GenerationContext};
use crate::shared::{ClassDescriptor, FieldDescriptor};

/// Lowercases the first character, e.g. `OrderService` -> `orderService`.
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Type names and fully-qualified imports for every artifact of one class.
pub(crate) struct Names {
    pub class: String,
    pub qualified: String,
    pub repository: String,
    pub dto: String,
    pub request: String,
    pub search_request: String,
    pub mapper: String,
    pub service: String,
    base_package: String,
}

impl Names {
    pub fn new(class: &ClassDescriptor, context: &GenerationContext) -> Self {
        let name = class.name.as_str();
        Self {
            class: class.name.clone(),
            qualified: class.qualified_name.clone(),
            repository: ArtifactKind::Repository.type_name(name),
            dto: ArtifactKind::Dto.type_name(name),
            request: ArtifactKind::Request.type_name(name),
            search_request: ArtifactKind::SearchRequest.type_name(name),
            mapper: ArtifactKind::Mapper.type_name(name),
            service: ArtifactKind::Service.type_name(name),
            base_package: context.base_package.clone(),
        }
    }

    /// Fully-qualified import of a generated type.
    pub fn import(&self, kind: ArtifactKind) -> String {
        format!(
            "{}.{}.{}",
            self.base_package,
            kind.subpackage(),
            kind.type_name(&self.class)
        )
    }
}

/// Renders one `private Type name;` line per field, each optionally
/// preceded by an annotation line. Lines end with a newline.
pub(crate) fn field_block(fields: &[FieldDescriptor], annotation: Option<&str>) -> String {
    let mut block = String::new();
    for field in fields {
        if let Some(annotation) = annotation {
            block.push_str(&format!("    {annotation}\n"));
        }
        block.push_str(&format!("    private {} {};\n", field.type_text, field.name));
    }
    block
}
