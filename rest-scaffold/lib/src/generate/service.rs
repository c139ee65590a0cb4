use crate::generate::naming::{Names, lower_first};
use crate::generate::{ArtifactKind, GeneratedArtifact, GenerationContext};
use crate::shared::ClassDescriptor;

/// Service wiring the repository and mapper into CRUD operations.
///
/// `search` is emitted as a stub that always throws
/// `UnsupportedOperationException`.
pub fn generate(class: &ClassDescriptor, context: &GenerationContext) -> GeneratedArtifact {
    let names = Names::new(class, context);
    let kind = ArtifactKind::Service;
    let repository_field = lower_first(&names.repository);
    let mapper_field = lower_first(&names.mapper);

    let content = format!(
        r#"package {package};

import {repository_import};
import {mapper_import};
import {request_import};
import {search_request_import};
import {dto_import};
import {entity_import};
import lombok.RequiredArgsConstructor;
import org.springframework.data.domain.Page;
import org.springframework.stereotype.Service;
import jakarta.persistence.EntityNotFoundException;

@Service
@RequiredArgsConstructor
public class {service} {{

    private final {repository} {repository_field};
    private final {mapper} {mapper_field};

    public {dto} create({request} request) {{
        {entity} entity = {mapper_field}.toEntity(request);
        {entity} savedEntity = {repository_field}.save(entity);
        return {mapper_field}.toDto(savedEntity);
    }}

    public {dto} update(Long id, {request} request) {{
        {entity} entity = {repository_field}.findById(id)
            .orElseThrow(() -> new EntityNotFoundException("{entity} not found with id: " + id));
        {mapper_field}.updateEntity(request, entity);
        {entity} updatedEntity = {repository_field}.save(entity);
        return {mapper_field}.toDto(updatedEntity);
    }}

    public void delete(Long id) {{
        {repository_field}.deleteById(id);
    }}

    public {dto} get(Long id) {{
        return {repository_field}.findById(id)
            .map({mapper_field}::toDto)
            .orElseThrow(() -> new EntityNotFoundException("{entity} not found with id: " + id));
    }}

    public Page<{dto}> search({search_request} searchRequest) {{
        // Build a Specification<{entity}> from searchRequest and return
        // {repository_field}.findAll(spec, pageable).map({mapper_field}::toDto).
        throw new UnsupportedOperationException("Search not implemented yet");
    }}
}}
"#,
        package = context.package_for(kind),
        repository_import = names.import(ArtifactKind::Repository),
        mapper_import = names.import(ArtifactKind::Mapper),
        request_import = names.import(ArtifactKind::Request),
        search_request_import = names.import(ArtifactKind::SearchRequest),
        dto_import = names.import(ArtifactKind::Dto),
        entity_import = names.qualified,
        service = names.service,
        repository = names.repository,
        mapper = names.mapper,
        entity = names.class,
        request = names.request,
        search_request = names.search_request,
        dto = names.dto,
    );

    GeneratedArtifact::new(kind, &class.name, context, content)
}
