//! Tree-sitter parser implementation

use tree_sitter::{Parser as TSParser, Tree};

use crate::errors::{AnalysisError, Result};
use crate::features::parsing::domain::{ParseIssue, SyntaxKind, SyntaxNode, SyntaxTree};
use crate::shared::models::Span;

/// Tree-sitter based parser for the submitted compilation units
pub struct TreeSitterParser {
    language: TreeSitterLanguage,
}

/// Supported tree-sitter languages
#[derive(Debug, Clone, Copy)]
pub enum TreeSitterLanguage {
    Java,
}

impl TreeSitterParser {
    /// Create a Java parser
    pub fn java() -> Self {
        Self {
            language: TreeSitterLanguage::Java,
        }
    }

    pub fn language_name(&self) -> &'static str {
        match self.language {
            TreeSitterLanguage::Java => "java",
        }
    }

    /// Parse source code into a SyntaxTree
    pub fn parse(&self, source: &str) -> Result<SyntaxTree> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.get_ts_language())
            .map_err(|e| AnalysisError::parse(format!("failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| AnalysisError::parse("failed to parse source code"))?;

        Ok(self.convert_tree(&tree, source))
    }

    fn get_ts_language(&self) -> tree_sitter::Language {
        match self.language {
            TreeSitterLanguage::Java => tree_sitter_java::language(),
        }
    }

    /// Convert tree-sitter tree to our domain model
    fn convert_tree(&self, tree: &Tree, source: &str) -> SyntaxTree {
        let root_node = tree.root_node();
        let root = convert_node(&root_node, source);

        let mut errors = Vec::new();
        collect_errors(&root_node, &mut errors);

        SyntaxTree::new(root, source.to_string()).with_errors(errors)
    }
}

/// Convert a tree-sitter node to SyntaxNode
fn convert_node(node: &tree_sitter::Node, source: &str) -> SyntaxNode {
    let kind = SyntaxKind::from_grammar(node.kind());
    let span = node_span(node);

    let children: Vec<SyntaxNode> = (0..node.child_count())
        .filter_map(|i| node.child(i))
        .filter(|c| !c.is_extra()) // Skip comments
        .map(|c| convert_node(&c, source))
        .collect();

    let mut converted = SyntaxNode::new(kind, span)
        .with_named(node.is_named())
        .with_children(children);
    if node.child_count() == 0 {
        let text = source.get(node.byte_range()).unwrap_or("");
        converted = converted.with_text(text);
    }
    converted
}

/// Collect parse errors
fn collect_errors(node: &tree_sitter::Node, errors: &mut Vec<ParseIssue>) {
    if node.is_error() || node.is_missing() {
        let span = node_span(node);
        errors.push(ParseIssue {
            message: format!(
                "syntax error at {}:{}",
                span.start_line, span.start_col
            ),
            span,
        });
    }

    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            collect_errors(&child, errors);
        }
    }
}

fn node_span(node: &tree_sitter::Node) -> Span {
    Span::new(
        node.start_position().row as u32 + 1,
        node.start_position().column as u32,
        node.end_position().row as u32 + 1,
        node.end_position().column as u32,
    )
}
