//! Template generators for the Spring REST vertical slice.
//!
//! Every generator is a pure function of a [`ClassDescriptor`] and a
//! [`GenerationContext`]; nothing here touches the filesystem.

mod artifact;
pub mod controller;
pub mod dto;
pub mod mapper;
pub(crate) mod naming;
pub mod repository;
pub mod request;
pub mod service;

pub use artifact::{ArtifactKind, GeneratedArtifact, GenerationContext};
pub use naming::lower_first;

use tracing::warn;

use crate::shared::ClassDescriptor;

/// Renders all seven artifacts in their fixed order: repository, DTO,
/// request, search request, mapper, service, controller.
pub fn generate_all(class: &ClassDescriptor, context: &GenerationContext) -> Vec<GeneratedArtifact> {
    if context.base_package.is_empty() {
        warn!(
            class = %class.name,
            "base directory is outside every source root, generated packages will start with `.`"
        );
    }

    let mut artifacts = Vec::with_capacity(7);
    artifacts.push(repository::generate(class, context));
    artifacts.push(dto::generate(class, context));
    artifacts.extend(request::generate(class, context));
    artifacts.push(mapper::generate(class, context));
    artifacts.push(service::generate(class, context));
    artifacts.push(controller::generate(class, context));
    artifacts
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::shared::{FieldDescriptor, SourceLanguage};

    fn order() -> ClassDescriptor {
        ClassDescriptor::new(
            "Order",
            "com.app.domain.Order",
            vec![FieldDescriptor::new("id", "Long"), FieldDescriptor::new("total", "Double")],
            SourceLanguage::Java,
        )
    }

    fn context() -> GenerationContext {
        GenerationContext::new("com.app", Some(PathBuf::from("/proj/src/main/java/com/app")))
    }

    fn find(artifacts: &[GeneratedArtifact], kind: ArtifactKind) -> &GeneratedArtifact {
        artifacts
            .iter()
            .find(|artifact| artifact.kind == kind)
            .expect("artifact should be generated")
    }

    #[test]
    fn generates_seven_artifacts_in_order() {
        let artifacts = generate_all(&order(), &context());

        let kinds: Vec<_> = artifacts.iter().map(|artifact| artifact.kind).collect();
        assert_eq!(kinds, ArtifactKind::iter().collect::<Vec<_>>());

        let names: Vec<_> = artifacts.iter().map(|artifact| artifact.file_name.as_str()).collect();
        assert_eq!(
            names,
            [
                "OrderRepository.java",
                "OrderDto.java",
                "OrderRequest.java",
                "OrderSearchRequest.java",
                "OrderMapper.java",
                "OrderService.java",
                "OrderController.java",
            ]
        );
    }

    #[test]
    fn every_artifact_declares_its_package() {
        for artifact in generate_all(&order(), &context()) {
            assert!(
                artifact
                    .content
                    .starts_with(&format!("package {};\n", artifact.package)),
                "{} has the wrong package line",
                artifact.file_name
            );
        }
    }

    #[test]
    fn dto_matches_template() {
        let artifacts = generate_all(&order(), &context());

        assert_eq!(
            find(&artifacts, ArtifactKind::Dto).content,
            "package com.app.service.model;\n\
             \n\
             import lombok.Data;\n\
             \n\
             @Data\n\
             public class OrderDto {\n    \
             private Long id;\n    \
             private Double total;\n\
             }\n"
        );
    }

    #[test]
    fn request_fields_are_required_and_search_fields_are_not() {
        let artifacts = generate_all(&order(), &context());
        let request = &find(&artifacts, ArtifactKind::Request).content;
        let search = &find(&artifacts, ArtifactKind::SearchRequest).content;

        assert!(request.contains("    @NotNull\n    private Long id;\n    @NotNull\n    private Double total;\n"));
        assert!(request.contains("import jakarta.validation.constraints.NotNull;"));
        assert!(search.contains("public class OrderSearchRequest {\n    private Long id;\n    private Double total;\n}"));
        assert!(!search.contains("@NotNull"));
    }

    #[test]
    fn repository_uses_the_qualified_entity() {
        let artifacts = generate_all(&order(), &context());
        let repository = &find(&artifacts, ArtifactKind::Repository).content;

        assert!(repository.contains("import com.app.domain.Order;"));
        assert!(repository.contains(
            "public interface OrderRepository extends JpaRepository<Order, Long>, JpaSpecificationExecutor<Order> {"
        ));
    }

    #[test]
    fn mapper_declares_three_conversions() {
        let artifacts = generate_all(&order(), &context());
        let mapper = &find(&artifacts, ArtifactKind::Mapper).content;

        assert!(mapper.contains("import com.app.web.model.OrderRequest;"));
        assert!(mapper.contains("import com.app.service.model.OrderDto;"));
        assert!(mapper.contains("OrderMapper INSTANCE = Mappers.getMapper(OrderMapper.class);"));
        assert!(mapper.contains("Order toEntity(OrderRequest request);"));
        assert!(mapper.contains("void updateEntity(OrderRequest request, @MappingTarget Order entity);"));
        assert!(mapper.contains("OrderDto toDto(Order entity);"));
    }

    #[test]
    fn service_search_is_a_stub() {
        let artifacts = generate_all(&order(), &context());
        let service = &find(&artifacts, ArtifactKind::Service).content;

        assert!(service.contains("private final OrderRepository orderRepository;"));
        assert!(service.contains("private final OrderMapper orderMapper;"));
        assert!(service.contains("public Page<OrderDto> search(OrderSearchRequest searchRequest) {"));
        assert!(service.contains("throw new UnsupportedOperationException(\"Search not implemented yet\");"));
        assert!(service.contains("new EntityNotFoundException(\"Order not found with id: \" + id)"));
    }

    #[test]
    fn controller_routes_under_lowercased_name() {
        let artifacts = generate_all(&order(), &context());
        let controller = &find(&artifacts, ArtifactKind::Controller).content;

        assert!(controller.contains("@RequestMapping(\"/api/order\")"));
        assert!(controller.contains("@PutMapping(\"/{id}\")"));
        assert!(controller.contains("@DeleteMapping(\"/{id}\")"));
        assert!(controller.contains("@GetMapping(\"/{id}\")"));
        assert!(controller.contains("@PostMapping(\"/search\")"));
        assert!(controller.contains("private final OrderService orderService;"));
    }

    #[test]
    fn empty_field_list_still_renders_a_class() {
        let empty = ClassDescriptor::new("Tag", "Tag", Vec::new(), SourceLanguage::Kotlin);
        let artifacts = generate_all(&empty, &context());

        assert_eq!(artifacts.len(), 7);
        assert!(find(&artifacts, ArtifactKind::Dto).content.ends_with("public class TagDto {\n}\n"));
    }
}
