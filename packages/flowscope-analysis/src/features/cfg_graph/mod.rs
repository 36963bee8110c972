//! CFG Graph Feature
//!
//! Projects the engine's control-flow dump into a renderable debug graph and
//! a plain-text listing.

mod printer;
mod projector;

pub use printer::print;
pub use projector::project;
