//! Thin helpers over the tree-sitter Java grammar.

use tree_sitter::{Node, Parser, Tree};

use crate::error::SourceParseError;

/// Parse Java source into a syntax tree.
pub(crate) fn parse(source: &str) -> Result<Tree, SourceParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_java::language())
        .map_err(|e| SourceParseError::Grammar(e.to_string()))?;
    parser
        .parse(source, None)
        .ok_or_else(|| SourceParseError::Grammar("parser produced no tree".to_string()))
}

pub(crate) fn node_text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap_or_default()
}

pub(crate) fn first_child_of_kind<'t>(node: Node<'t>, kinds: &[&str]) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .find(|child| kinds.contains(&child.kind()))
}

pub(crate) fn named_children_of_kind<'t>(node: Node<'t>, kind: &str) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() == kind)
        .collect()
}

/// Collect every descendant of `kind`, pre-order, i.e. source order.
pub(crate) fn collect_descendants<'t>(node: Node<'t>, kind: &str, out: &mut Vec<Node<'t>>) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == kind {
            out.push(child);
        }
        collect_descendants(child, kind, out);
    }
}
