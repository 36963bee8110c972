//! Symbolic engine port (interface)
//!
//! Defines the contract with the external symbolic-execution engine.

use crate::errors::Result;
use crate::features::engine::domain::AnalysisReport;

/// SymbolicEngine trait - abstraction over the external analysis engine
pub trait SymbolicEngine: Send + Sync {
    /// Run the engine over one compilation unit and collect its report
    fn analyze(&self, source: &str) -> Result<AnalysisReport>;

    /// Human-readable engine description, for logs
    fn describe(&self) -> String;
}
