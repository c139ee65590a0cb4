//! Field and name extraction for the Kotlin grammar.
//!
//! The lookups accept both the `identifier` and `simple_identifier`
//! spellings so they do not depend on one grammar revision.

use tree_sitter::Node;

use crate::file::source_file::{children_by_kind, find_child_by_kind, node_text};
use crate::shared::{FieldDescriptor, UNRESOLVED_TYPE};

const NAME_KINDS: &[&str] = &["identifier", "simple_identifier", "type_identifier"];
const BODY_KINDS: &[&str] = &["class_body", "enum_class_body"];

pub(crate) fn is_class_like(kind: &str) -> bool {
    kind == "class_declaration"
}

pub(crate) fn class_name(node: Node<'_>, source: &str) -> Option<String> {
    node.child_by_field_name("name")
        .or_else(|| find_child_by_kind(node, NAME_KINDS))
        .and_then(|name| node_text(name, source))
}

/// Reads `package a.b.c` from the file header.
pub(crate) fn package_name(root: Node<'_>, source: &str) -> Option<String> {
    let header = find_child_by_kind(root, &["package_header"])?;
    let text = node_text(header, source)?;
    let name = text
        .trim()
        .strip_prefix("package")?
        .trim()
        .trim_end_matches(';')
        .trim();

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Properties in declaration order: `val`/`var` primary-constructor
/// parameters, then property declarations directly in the class body.
pub(crate) fn fields(node: Node<'_>, source: &str) -> Vec<FieldDescriptor> {
    let mut fields = Vec::new();

    if let Some(constructor) = find_child_by_kind(node, &["primary_constructor"]) {
        let mut parameters = children_by_kind(constructor, &["class_parameter"]);
        if let Some(list) = find_child_by_kind(constructor, &["class_parameters"]) {
            parameters.extend(children_by_kind(list, &["class_parameter"]));
        }

        for parameter in parameters.into_iter().filter(|p| declares_property(*p)) {
            if let Some(field) = field_from(parameter, source) {
                fields.push(field);
            }
        }
    }

    if let Some(body) = find_child_by_kind(node, BODY_KINDS) {
        for property in children_by_kind(body, &["property_declaration"]) {
            let target =
                find_child_by_kind(property, &["variable_declaration"]).unwrap_or(property);
            if let Some(field) = field_from(target, source) {
                fields.push(field);
            }
        }
    }

    fields
}

/// A constructor parameter is a property only when bound with `val`/`var`.
fn declares_property(parameter: Node<'_>) -> bool {
    let mut cursor = parameter.walk();
    parameter
        .children(&mut cursor)
        .any(|child| matches!(child.kind(), "val" | "var" | "binding_pattern_kind"))
}

/// `name: Type` where the type is the first named node after the colon.
fn field_from(node: Node<'_>, source: &str) -> Option<FieldDescriptor> {
    let name = find_child_by_kind(node, NAME_KINDS)
        .filter(|name| !name.is_missing())
        .and_then(|name| node_text(name, source))
        .filter(|name| !name.is_empty())?;

    let mut cursor = node.walk();
    let type_text = node
        .children(&mut cursor)
        .skip_while(|child| child.kind() != ":")
        .skip(1)
        .find(|child| child.is_named())
        .and_then(|ty| node_text(ty, source))
        .unwrap_or_else(|| UNRESOLVED_TYPE.to_string());

    Some(FieldDescriptor::new(name, type_text))
}

#[cfg(test)]
mod tests {
    use crate::error::ScaffoldError;
    use crate::file::SourceFile;
    use crate::shared::{FieldDescriptor, SourceLanguage};

    fn parse(source: &str) -> SourceFile {
        SourceFile::from_source("Test.kt", SourceLanguage::Kotlin, source.to_string())
            .expect("kotlin source should parse")
    }

    #[test]
    fn reads_constructor_and_body_properties_in_order() {
        let file = parse(
            "package com.app.domain\n\ndata class Order(val id: Long, var total: Double?, note: String) {\n    val tags: List<String> = emptyList()\n}\n",
        );
        let class = file.resolve_class(false).expect("class");

        assert_eq!(class.name, "Order");
        assert_eq!(class.qualified_name, "com.app.domain.Order");
        assert_eq!(
            class.fields,
            vec![
                FieldDescriptor::new("id", "Long"),
                FieldDescriptor::new("total", "Double?"),
                FieldDescriptor::new("tags", "List<String>"),
            ]
        );
    }

    #[test]
    fn untyped_property_degrades_to_null() {
        let file = parse("class Counter {\n    var count = 0\n}\n");
        let class = file.resolve_class(false).expect("class");

        assert_eq!(class.fields, vec![FieldDescriptor::new("count", "null")]);
    }

    #[test]
    fn strict_types_rejects_untyped_property() {
        let file = parse("class Counter {\n    var count = 0\n}\n");
        let error = file.resolve_class(true).expect_err("strict types");

        assert!(matches!(
            error,
            ScaffoldError::UnresolvedFieldType { ref field, .. } if field == "count"
        ));
    }

    #[test]
    fn object_declarations_are_not_classes() {
        let file = parse("object Registry {\n    val size: Int = 0\n}\n");

        assert!(file.find_class().is_none());
    }
}
