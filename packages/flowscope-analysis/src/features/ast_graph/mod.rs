//! AST Graph Feature
//!
//! Projects the syntax tree into a renderable debug graph.

mod projector;

pub use projector::project;
