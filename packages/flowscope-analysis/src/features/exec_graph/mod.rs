//! Exploded Graph Feature
//!
//! Projects the engine's execution dump into a renderable debug graph.
//! Node and edge details are serialized for the browser-side detail panel.

mod details;
mod projector;

pub use details::{
    EdgeDetails, MethodYieldDetails, NodeDetails, SvWithConstraints, SvWithSymbol, NO_CONSTRAINT,
};
pub use projector::project;
