use crate::generate::naming::{Names, lower_first};
use crate::generate::{ArtifactKind, GeneratedArtifact, GenerationContext};
use crate::shared::ClassDescriptor;

/// Route prefix of the generated controller, e.g. `/api/order`.
pub fn endpoint(class_name: &str) -> String {
    format!("/api/{}", lower_first(class_name))
}

/// REST controller exposing create, update, delete, get and search.
pub fn generate(class: &ClassDescriptor, context: &GenerationContext) -> GeneratedArtifact {
    let names = Names::new(class, context);
    let kind = ArtifactKind::Controller;
    let service_field = lower_first(&names.service);

    let content = format!(
        r#"package {package};

import {service_import};
import {request_import};
import {search_request_import};
import {dto_import};
import lombok.RequiredArgsConstructor;
import org.springframework.data.domain.Page;
import org.springframework.http.ResponseEntity;
import org.springframework.web.bind.annotation.*;
import jakarta.validation.Valid;

@RestController
@RequestMapping("{endpoint}")
@RequiredArgsConstructor
public class {controller} {{

    private final {service} {service_field};

    @PostMapping
    public ResponseEntity<{dto}> create(@Valid @RequestBody {request} request) {{
        return ResponseEntity.ok(this.{service_field}.create(request));
    }}

    @PutMapping("/{{id}}")
    public ResponseEntity<{dto}> update(@PathVariable Long id, @Valid @RequestBody {request} request) {{
        return ResponseEntity.ok(this.{service_field}.update(id, request));
    }}

    @DeleteMapping("/{{id}}")
    public ResponseEntity<Void> delete(@PathVariable Long id) {{
        this.{service_field}.delete(id);
        return ResponseEntity.ok().build();
    }}

    @GetMapping("/{{id}}")
    public ResponseEntity<{dto}> get(@PathVariable Long id) {{
        return ResponseEntity.ok(this.{service_field}.get(id));
    }}

    @PostMapping("/search")
    public ResponseEntity<Page<{dto}>> search(@RequestBody {search_request} searchRequest) {{
        return ResponseEntity.ok(this.{service_field}.search(searchRequest));
    }}
}}
"#,
        package = context.package_for(kind),
        service_import = names.import(ArtifactKind::Service),
        request_import = names.import(ArtifactKind::Request),
        search_request_import = names.import(ArtifactKind::SearchRequest),
        dto_import = names.import(ArtifactKind::Dto),
        endpoint = endpoint(&class.name),
        controller = kind.type_name(&class.name),
        service = names.service,
        request = names.request,
        search_request = names.search_request,
        dto = names.dto,
    );

    GeneratedArtifact::new(kind, &class.name, context, content)
}
