use std::ops::Range;

use tree_sitter::{Node, Point, Tree};

use crate::error::Result;
use crate::kind;

/// A Solidity source string together with its syntax tree.
///
/// Parsing always yields a tree: tree-sitter recovers from bad input by
/// inserting ERROR and MISSING nodes, which [`SourceFile::syntax_errors`]
/// reports.
#[derive(Debug, Clone)]
pub struct SourceFile {
    source: String,
    tree: Tree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// Input the grammar could not place.
    Unexpected,
    /// A token the parser inserted to recover, e.g. a `;`.
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub byte_range: Range<usize>,
    pub start: Point,
    pub end: Point,
}

impl SourceFile {
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let tree = crate::parse(&source)?;
        Ok(Self { source, tree })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text spanned by `node`.
    pub fn text(&self, node: Node<'_>) -> &str {
        &self.source[node.byte_range()]
    }

    /// Text of the `name` field of `node`, if it has one.
    pub fn name_of(&self, node: Node<'_>) -> Option<&str> {
        node.child_by_field_name(kind::field::NAME)
            .map(|name| self.text(name))
    }

    pub fn has_errors(&self) -> bool {
        self.root().has_error()
    }

    /// Every ERROR and MISSING node in document order.
    pub fn syntax_errors(&self) -> Vec<SyntaxError> {
        let mut errors = Vec::new();
        if self.has_errors() {
            collect_errors(self.root(), &mut errors);
        }
        errors
    }

    /// Named top-level children of the root, comments excluded.
    pub fn declarations(&self) -> impl Iterator<Item = Node<'_>> + '_ {
        let root = self.root();
        (0..root.named_child_count())
            .filter_map(move |i| root.named_child(i))
            .filter(|node| node.kind() != kind::COMMENT)
    }

    /// Top-level declarations of `kind`, e.g. [`kind::CONTRACT_DECLARATION`].
    pub fn declarations_of<'a>(
        &'a self,
        node_kind: &'a str,
    ) -> impl Iterator<Item = Node<'a>> + 'a {
        self.declarations().filter(move |node| node.kind() == node_kind)
    }
}

fn collect_errors(node: Node<'_>, errors: &mut Vec<SyntaxError>) {
    if node.is_missing() {
        errors.push(SyntaxError::at(node, SyntaxErrorKind::Missing(node.kind())));
        return;
    }
    if node.is_error() {
        errors.push(SyntaxError::at(node, SyntaxErrorKind::Unexpected));
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() || child.is_missing() {
            collect_errors(child, errors);
        }
    }
}

impl SyntaxError {
    fn at(node: Node<'_>, kind: SyntaxErrorKind) -> Self {
        Self {
            kind,
            byte_range: node.byte_range(),
            start: node.start_position(),
            end: node.end_position(),
        }
    }
}
