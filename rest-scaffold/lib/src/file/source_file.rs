use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use tree_sitter::{Node, Parser};

use crate::error::{Result, ScaffoldError};
use crate::file::{java, kotlin};
use crate::shared::{ClassDescriptor, FieldDescriptor, SourceLanguage, UNRESOLVED_TYPE};

/// Represents a parsed Java or Kotlin source file backed by tree-sitter.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path the source was read from.
    pub file: PathBuf,
    /// The detected language for the file.
    pub language: SourceLanguage,
    source: String,
    tree: tree_sitter::Tree,
}

/// A class-like declaration found in a [`SourceFile`].
///
/// The two variants carry the same information in different grammars;
/// everything downstream only sees the [`ClassDescriptor`] built from it.
#[derive(Debug, Clone, Copy)]
pub enum ClassDeclaration<'tree> {
    /// A Java `class`, `record`, `interface` or `enum`.
    Structural(Node<'tree>),
    /// A Kotlin `class` (including `data`, `enum` and `interface` forms).
    AlternateLanguage(Node<'tree>),
}

impl<'tree> ClassDeclaration<'tree> {
    pub fn node(&self) -> Node<'tree> {
        match self {
            Self::Structural(node) | Self::AlternateLanguage(node) => *node,
        }
    }

    /// The declared simple name, if the parser recovered one.
    pub fn name(&self, source: &str) -> Option<String> {
        let name = match self {
            Self::Structural(node) => java::class_name(*node, source),
            Self::AlternateLanguage(node) => kotlin::class_name(*node, source),
        }?;

        if name.is_empty() { None } else { Some(name) }
    }

    /// Fields in declaration order. Missing type text becomes `null`.
    pub fn fields(&self, source: &str) -> Vec<FieldDescriptor> {
        match self {
            Self::Structural(node) => java::fields(*node, source),
            Self::AlternateLanguage(node) => kotlin::fields(*node, source),
        }
    }
}

impl SourceFile {
    /// Reads and parses the file on disk, detecting the language from its
    /// extension.
    ///
    /// ## Errors
    /// Returns an error if the file cannot be read, parsed, or is not Java
    /// or Kotlin.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = path.as_ref().to_path_buf();
        let language = SourceLanguage::from_path(&file)
            .ok_or_else(|| ScaffoldError::UnsupportedLanguage { path: file.clone() })?;
        let source = std::fs::read_to_string(&file).map_err(|source| ScaffoldError::Io {
            path: file.clone(),
            source,
        })?;

        Self::from_source(file, language, source)
    }

    /// Parses in-memory source as if it had been read from `path`.
    ///
    /// ## Errors
    /// Returns an error if tree-sitter cannot load the grammar or produce a
    /// tree.
    pub fn from_source<P: Into<PathBuf>>(
        path: P,
        language: SourceLanguage,
        source: String,
    ) -> Result<Self> {
        let file = path.into();
        let mut parser = Parser::new();
        parser
            .set_language(&language.tree_sitter_language())
            .map_err(|_| ScaffoldError::UnsupportedLanguage { path: file.clone() })?;

        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| ScaffoldError::ParseFailed { path: file.clone() })?;

        Ok(Self {
            file,
            language,
            source,
            tree,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// The package declared at the top of the file, if any.
    pub fn package_name(&self) -> Option<String> {
        let root = self.tree.root_node();
        match self.language {
            SourceLanguage::Java => java::package_name(root, &self.source),
            SourceLanguage::Kotlin => kotlin::package_name(root, &self.source),
        }
    }

    /// Finds the first class-like declaration in the file (pre-order).
    pub fn find_class(&self) -> Option<ClassDeclaration<'_>> {
        let root = self.tree.root_node();
        match self.language {
            SourceLanguage::Java => {
                find_first(root, java::is_class_like).map(ClassDeclaration::Structural)
            }
            SourceLanguage::Kotlin => {
                find_first(root, kotlin::is_class_like).map(ClassDeclaration::AlternateLanguage)
            }
        }
    }

    /// Builds the [`ClassDescriptor`] for the first class in the file.
    ///
    /// With `strict_types` set, a field without declared type text is an
    /// error instead of degrading to the `null` type.
    ///
    /// ## Errors
    /// Returns [`ScaffoldError::NoClassFound`] if there is no class or it has
    /// no name, and [`ScaffoldError::UnresolvedFieldType`] under strict types.
    pub fn resolve_class(&self, strict_types: bool) -> Result<ClassDescriptor> {
        let no_class = || ScaffoldError::NoClassFound {
            path: self.file.clone(),
        };

        let declaration = self.find_class().ok_or_else(no_class)?;
        let name = declaration.name(&self.source).ok_or_else(no_class)?;
        let qualified_name = match self.package_name() {
            Some(package) if !package.is_empty() => format!("{package}.{name}"),
            _ => name.clone(),
        };
        let fields = declaration.fields(&self.source);

        debug!(
            file = %self.file.display(),
            class = %qualified_name,
            fields = fields.len(),
            "resolved class declaration"
        );

        let descriptor = ClassDescriptor::new(name, qualified_name, fields, self.language);

        if let Some(field) = descriptor.unresolved_fields().next() {
            if strict_types {
                return Err(ScaffoldError::UnresolvedFieldType {
                    class_name: descriptor.name.clone(),
                    field: field.name.clone(),
                });
            }
            warn!(
                class = %descriptor.name,
                field = %field.name,
                "field has no declared type, using `{UNRESOLVED_TYPE}`"
            );
        }

        Ok(descriptor)
    }
}

/// Depth-first pre-order search for the first node matching `predicate`.
fn find_first<'tree>(root: Node<'tree>, predicate: fn(&str) -> bool) -> Option<Node<'tree>> {
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if predicate(node.kind()) {
            return Some(node);
        }

        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }

    None
}

/// Returns the UTF-8 text covered by `node`.
pub(crate) fn node_text(node: Node<'_>, source: &str) -> Option<String> {
    node.utf8_text(source.as_bytes()).ok().map(str::to_string)
}

/// Finds the first child node whose kind is one of `kinds`.
pub(crate) fn find_child_by_kind<'a>(node: Node<'a>, kinds: &[&str]) -> Option<Node<'a>> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .find(|child| kinds.contains(&child.kind()))
}

/// Collects every child node whose kind is one of `kinds`.
pub(crate) fn children_by_kind<'a>(node: Node<'a>, kinds: &[&str]) -> Vec<Node<'a>> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|child| kinds.contains(&child.kind()))
        .collect()
}
