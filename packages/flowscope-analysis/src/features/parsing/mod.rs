//! Parsing Feature
//!
//! Converts submitted source into the syntax tree the viewer projects and
//! locates the method the engine analyzes.
//!
//! ## Structure
//! - `domain/` - SyntaxTree, SyntaxNode models, first-method lookup
//! - `infrastructure/` - TreeSitterParser

pub mod domain;
pub mod infrastructure;

// Re-exports
pub use domain::{ParseIssue, SyntaxKind, SyntaxNode, SyntaxTree};
pub use infrastructure::TreeSitterParser;
