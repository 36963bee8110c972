//! Feature modules
//!
//! ## Structure
//!
//! - `parsing`: Java source to syntax tree, plus the analyzed-method lookup
//! - `engine`: symbolic engine boundary (report model, port, adapters)
//! - `ast_graph`: syntax tree projection
//! - `cfg_graph`: control-flow projection and text listing
//! - `exec_graph`: exploded execution graph projection

pub mod ast_graph;
pub mod cfg_graph;
pub mod engine;
pub mod exec_graph;
pub mod parsing;
