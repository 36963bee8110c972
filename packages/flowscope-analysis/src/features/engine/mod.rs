//! Engine Feature
//!
//! Boundary with the external symbolic-execution engine. The engine parses,
//! builds control flow and runs symbolic execution on its own; this feature
//! only carries its report across.
//!
//! ## Structure
//! - `domain/` - AnalysisReport wire model
//! - `ports/` - SymbolicEngine trait
//! - `infrastructure/` - EngineCommand (subprocess), ReportReplay (file)

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::AnalysisReport;
pub use infrastructure::{EngineCommand, ReportReplay};
pub use ports::SymbolicEngine;
