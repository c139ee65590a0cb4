use crate::generate::naming::{Names, field_block};
use crate::generate::{ArtifactKind, GeneratedArtifact, GenerationContext};
use crate::shared::ClassDescriptor;

/// The validated create/update request and the unconstrained search
/// request, in that order.
pub fn generate(class: &ClassDescriptor, context: &GenerationContext) -> [GeneratedArtifact; 2] {
    [request(class, context), search_request(class, context)]
}

fn request(class: &ClassDescriptor, context: &GenerationContext) -> GeneratedArtifact {
    let names = Names::new(class, context);
    let kind = ArtifactKind::Request;

    let content = format!(
        r#"package {package};

import jakarta.validation.constraints.NotNull;
import lombok.Data;

@Data
public class {request} {{
{fields}}}
"#,
        package = context.package_for(kind),
        request = names.request,
        fields = field_block(&class.fields, Some("@NotNull")),
    );

    GeneratedArtifact::new(kind, &class.name, context, content)
}

fn search_request(class: &ClassDescriptor, context: &GenerationContext) -> GeneratedArtifact {
    let names = Names::new(class, context);
    let kind = ArtifactKind::SearchRequest;

    let content = format!(
        r#"package {package};

import lombok.Data;

@Data
public class {search_request} {{
{fields}}}
"#,
        package = context.package_for(kind),
        search_request = names.search_request,
        fields = field_block(&class.fields, None),
    );

    GeneratedArtifact::new(kind, &class.name, context, content)
}
