//! Field and name extraction for the Java grammar.

use tree_sitter::Node;

use crate::file::source_file::{children_by_kind, find_child_by_kind, node_text};
use crate::shared::{FieldDescriptor, UNRESOLVED_TYPE};

const CLASS_KINDS: &[&str] = &[
    "class_declaration",
    "record_declaration",
    "interface_declaration",
    "enum_declaration",
    "annotation_type_declaration",
];

pub(crate) fn is_class_like(kind: &str) -> bool {
    CLASS_KINDS.contains(&kind)
}

pub(crate) fn class_name(node: Node<'_>, source: &str) -> Option<String> {
    node.child_by_field_name("name")
        .and_then(|name| node_text(name, source))
}

/// Reads `package a.b.c;` from the compilation unit.
pub(crate) fn package_name(root: Node<'_>, source: &str) -> Option<String> {
    let declaration = find_child_by_kind(root, &["package_declaration"])?;
    let name = find_child_by_kind(declaration, &["scoped_identifier", "identifier"])?;
    node_text(name, source)
}

/// Record components first, then every declarator of every field in the
/// body. Enum constants are not fields.
pub(crate) fn fields(node: Node<'_>, source: &str) -> Vec<FieldDescriptor> {
    let mut fields = Vec::new();

    if let Some(parameters) = node.child_by_field_name("parameters") {
        for parameter in children_by_kind(parameters, &["formal_parameter"]) {
            let Some(name) = declared_name(parameter, source) else {
                continue;
            };
            fields.push(FieldDescriptor::new(name, type_text(parameter, None, source)));
        }
    }

    let Some(body) = node.child_by_field_name("body") else {
        return fields;
    };

    let mut members = children_by_kind(body, &["field_declaration", "constant_declaration"]);
    if let Some(declarations) = find_child_by_kind(body, &["enum_body_declarations"]) {
        members.extend(children_by_kind(declarations, &["field_declaration"]));
    }

    for member in members {
        let mut cursor = member.walk();
        for declarator in member.children_by_field_name("declarator", &mut cursor) {
            let Some(name) = declared_name(declarator, source) else {
                continue;
            };
            fields.push(FieldDescriptor::new(
                name,
                type_text(member, Some(declarator), source),
            ));
        }
    }

    fields
}

/// The `name` of a parameter or declarator. Names the parser had to invent
/// during error recovery are skipped.
fn declared_name(node: Node<'_>, source: &str) -> Option<String> {
    let name = node.child_by_field_name("name")?;
    if name.is_missing() {
        return None;
    }
    node_text(name, source).filter(|text| !text.is_empty())
}

/// The declared type, with C-style dimensions from the declarator
/// (`int values[]`) appended.
fn type_text(owner: Node<'_>, declarator: Option<Node<'_>>, source: &str) -> String {
    let Some(mut text) = owner
        .child_by_field_name("type")
        .and_then(|ty| node_text(ty, source))
    else {
        return UNRESOLVED_TYPE.to_string();
    };

    if let Some(dimensions) = declarator
        .and_then(|declarator| declarator.child_by_field_name("dimensions"))
        .and_then(|dimensions| node_text(dimensions, source))
    {
        text.push_str(&dimensions);
    }

    text
}
