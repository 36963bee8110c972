//! Parsing domain models

mod syntax_tree;

pub use syntax_tree::{ParseIssue, SyntaxKind, SyntaxNode, SyntaxTree};
