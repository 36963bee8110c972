//! Request pipeline
//!
//! Coordinates parsing, the engine call and the graph projections for one
//! source snippet.

mod driver;

pub use driver::{AnalysisDriver, PageValues};
