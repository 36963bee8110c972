//! Shared models

mod graph;
mod span;

pub use graph::{DebugGraph, GraphEdge, GraphNode, Highlighting};
pub use span::Span;
