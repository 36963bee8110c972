//! Engine ports (interfaces)

mod symbolic_engine;

pub use symbolic_engine::SymbolicEngine;
