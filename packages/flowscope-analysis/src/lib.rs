/*
 * Flowscope Analysis - Symbolic Execution Viewer Core
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (DebugGraph, Span)
 * - features/    : Vertical slices (parsing → engine → graph projections)
 * - pipeline/    : Per-request orchestration
 *
 * The crate turns one source snippet into three renderable debug graphs:
 * the syntax tree, the control-flow graph of the first method, and the
 * exploded execution graph computed by an external symbolic engine.
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (parsing, engine boundary, graph projections)
pub mod features;

/// Per-request orchestration
pub mod pipeline;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{AnalysisError, ErrorKind, Result};
pub use features::engine::domain::AnalysisReport;
pub use features::engine::infrastructure::{EngineCommand, ReportReplay};
pub use features::engine::ports::SymbolicEngine;
pub use features::parsing::TreeSitterParser;
pub use pipeline::{AnalysisDriver, PageValues};
pub use shared::models::{DebugGraph, GraphEdge, GraphNode, Highlighting, Span};
