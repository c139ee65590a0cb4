use crate::generate::naming::{Names, field_block};
use crate::generate::{ArtifactKind, GeneratedArtifact, GenerationContext};
use crate::shared::ClassDescriptor;

/// Flat Lombok data holder mirroring the entity's fields.
pub fn generate(class: &ClassDescriptor, context: &GenerationContext) -> GeneratedArtifact {
    let names = Names::new(class, context);
    let kind = ArtifactKind::Dto;

    let content = format!(
        r#"package {package};

import lombok.Data;

@Data
public class {dto} {{
{fields}}}
"#,
        package = context.package_for(kind),
        dto = names.dto,
        fields = field_block(&class.fields, None),
    );

    GeneratedArtifact::new(kind, &class.name, context, content)
}
