use crate::generate::naming::Names;
use crate::generate::{ArtifactKind, GeneratedArtifact, GenerationContext};
use crate::shared::ClassDescriptor;

/// Spring Data JPA repository keyed by a `Long` id, with specification
/// support for the search endpoint.
pub fn generate(class: &ClassDescriptor, context: &GenerationContext) -> GeneratedArtifact {
    let names = Names::new(class, context);
    let kind = ArtifactKind::Repository;

    let content = format!(
        r#"package {package};

import {entity_import};
import org.springframework.data.jpa.repository.JpaRepository;
import org.springframework.data.jpa.repository.JpaSpecificationExecutor;
import org.springframework.stereotype.Repository;

@Repository
public interface {repository} extends JpaRepository<{entity}, Long>, JpaSpecificationExecutor<{entity}> {{
}}
"#,
        package = context.package_for(kind),
        entity_import = names.qualified,
        repository = names.repository,
        entity = names.class,
    );

    GeneratedArtifact::new(kind, &class.name, context, content)
}
