use crate::generate::naming::Names;
use crate::generate::{ArtifactKind, GeneratedArtifact, GenerationContext};
use crate::shared::ClassDescriptor;

/// MapStruct mapper between the entity, its request and its DTO.
pub fn generate(class: &ClassDescriptor, context: &GenerationContext) -> GeneratedArtifact {
    let names = Names::new(class, context);
    let kind = ArtifactKind::Mapper;

    let content = format!(
        r#"package {package};

import {entity_import};
import {request_import};
import {dto_import};
import org.mapstruct.Mapper;
import org.mapstruct.MappingTarget;
import org.mapstruct.factory.Mappers;

@Mapper(componentModel = "spring")
public interface {mapper} {{

    {mapper} INSTANCE = Mappers.getMapper({mapper}.class);

    {entity} toEntity({request} request);

    void updateEntity({request} request, @MappingTarget {entity} entity);

    {dto} toDto({entity} entity);
}}
"#,
        package = context.package_for(kind),
        entity_import = names.qualified,
        request_import = names.import(ArtifactKind::Request),
        dto_import = names.import(ArtifactKind::Dto),
        mapper = names.mapper,
        entity = names.class,
        request = names.request,
        dto = names.dto,
    );

    GeneratedArtifact::new(kind, &class.name, context, content)
}
