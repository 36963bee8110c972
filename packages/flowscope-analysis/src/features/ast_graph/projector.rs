//! Syntax tree projection
//!
//! Depth-first walk of the tree; ids are assigned in visit order, edges are
//! pushed after the child subtree they close over. Leaves render as token
//! records labeled with their source text; named leaves additionally keep
//! their kind node so identifiers and literals stay visible in the graph.

use serde::Serialize;

use crate::errors::Result;
use crate::features::parsing::domain::{SyntaxNode, SyntaxTree};
use crate::shared::models::{DebugGraph, GraphEdge, GraphNode, Highlighting};

#[derive(Serialize)]
struct KindDetails<'a> {
    kind: &'a str,
}

const TOKEN_KIND: &str = "TOKEN";

/// Project the syntax tree into the `AST` debug graph
pub fn project(tree: &SyntaxTree) -> Result<DebugGraph> {
    let mut graph = DebugGraph::new("AST");
    let mut next_id = 0usize;
    visit(&mut graph, &tree.root, &mut next_id, true)?;
    Ok(graph)
}

/// Emit records for `node` and its subtree; returns the id assigned to `node`
fn visit(
    graph: &mut DebugGraph,
    node: &SyntaxNode,
    next_id: &mut usize,
    is_root: bool,
) -> Result<usize> {
    let id = take_id(next_id);

    if node.is_leaf() {
        if node.named {
            // Kind node plus one token child carrying the source text.
            graph.add_node(kind_node(id, node, is_root)?);
            let token_id = take_id(next_id);
            graph.add_node(token_node(token_id, node)?);
            graph.add_edge(GraphEdge::new(id, token_id));
        } else {
            graph.add_node(token_node(id, node)?);
        }
        return Ok(id);
    }

    graph.add_node(kind_node(id, node, is_root)?);
    for child in &node.children {
        let child_id = visit(graph, child, next_id, false)?;
        graph.add_edge(GraphEdge::new(id, child_id));
    }
    Ok(id)
}

fn take_id(next_id: &mut usize) -> usize {
    let id = *next_id;
    *next_id += 1;
    id
}

fn kind_node(id: usize, node: &SyntaxNode, is_root: bool) -> Result<GraphNode> {
    let display_kind = node.display_kind();
    let label = format!("{} L#{}", display_kind, node.line());
    let details = serde_json::to_string(&KindDetails {
        kind: &display_kind,
    })?;

    let mut record = GraphNode::new(id, label).with_details(details);
    if let Some(highlighting) = kind_highlighting(node, is_root) {
        record = record.with_highlighting(highlighting);
    }
    Ok(record)
}

fn token_node(id: usize, node: &SyntaxNode) -> Result<GraphNode> {
    let details = serde_json::to_string(&KindDetails { kind: TOKEN_KIND })?;
    Ok(GraphNode::new(id, node.text.clone().unwrap_or_default())
        .with_details(details)
        .with_highlighting(Highlighting::TokenKind))
}

fn kind_highlighting(node: &SyntaxNode, is_root: bool) -> Option<Highlighting> {
    if is_root {
        Some(Highlighting::FirstNode)
    } else if node.kind.is_type_declaration() {
        Some(Highlighting::ClassKind)
    } else if node.kind.is_method_like() {
        Some(Highlighting::MethodKind)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::TreeSitterParser;

    fn project_source(source: &str) -> String {
        let tree = TreeSitterParser::java().parse(source).unwrap();
        project(&tree).unwrap().render()
    }

    #[test]
    fn test_root_is_first_node() {
        let rendered = project_source("class A { }");
        assert!(rendered.starts_with(
            "graph AST {0[details=\"{?kind?:?PROGRAM?}\",label=\"PROGRAM L#1\",highlighting=\"firstNode\"];"
        ));
    }

    #[test]
    fn test_class_and_method_highlighting() {
        let rendered = project_source("class A {\n  void foo() { }\n}");
        assert!(rendered.contains("label=\"CLASS_DECLARATION L#1\",highlighting=\"classKind\""));
        assert!(rendered.contains("label=\"METHOD_DECLARATION L#2\",highlighting=\"methodKind\""));
    }

    #[test]
    fn test_anonymous_tokens_render_with_source_text() {
        let rendered = project_source("class A { }");
        assert!(rendered.contains("details=\"{?kind?:?TOKEN?}\",label=\"class\",highlighting=\"tokenKind\""));
        assert!(rendered.contains("label=\"{\",highlighting=\"tokenKind\""));
        assert!(rendered.contains("label=\"}\",highlighting=\"tokenKind\""));
    }

    #[test]
    fn test_named_leaf_keeps_kind_node_above_token() {
        let rendered = project_source("class A { }");
        // identifier node followed by its token child and the closing edge
        assert!(rendered.contains("details=\"{?kind?:?IDENTIFIER?}\",label=\"IDENTIFIER L#1\"];"));
        assert!(rendered.contains("label=\"A\",highlighting=\"tokenKind\"];"));
    }

    #[test]
    fn test_edges_follow_child_subtrees() {
        let rendered = project_source("class A { }");
        // program -> class_declaration edge closes the record stream
        assert!(rendered.ends_with("0->1[];}"));
    }

    #[test]
    fn test_string_literal_labels_are_escaped() {
        let rendered = project_source("class A { String s = \"ise?\"; }");
        // quote and question mark tokens of the literal must be escaped
        assert!(rendered.contains("&quot;"));
        assert!(rendered.contains("&quest;"));
        assert!(!rendered.contains("label=\"\"\""));
    }

    #[test]
    fn test_ids_are_dense_visit_order() {
        let rendered = project_source("class A { }");
        for id in 1..6 {
            assert!(
                rendered.contains(&format!(";{}[", id)),
                "missing id {}",
                id
            );
        }
    }
}
