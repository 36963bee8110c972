//! Analysis driver
//!
//! Runs one snippet through parse, engine and the three graph projections.
//! Each request is synchronous and stateless; the driver owns no request
//! state and can serve calls from any thread.

use tracing::{debug, info};

use crate::errors::{AnalysisError, Result};
use crate::features::engine::ports::SymbolicEngine;
use crate::features::parsing::TreeSitterParser;
use crate::features::{ast_graph, cfg_graph, exec_graph};

/// Everything the page template needs for one analyzed snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageValues {
    /// Plain-text CFG listing
    pub cfg_text: String,
    /// AST debug graph notation
    pub ast: String,
    /// CFG debug graph notation
    pub cfg: String,
    /// Exploded execution graph notation
    pub eg: String,
}

/// Drives one source snippet through the full pipeline
pub struct AnalysisDriver {
    parser: TreeSitterParser,
    engine: Box<dyn SymbolicEngine>,
}

impl AnalysisDriver {
    pub fn new(engine: Box<dyn SymbolicEngine>) -> Self {
        Self {
            parser: TreeSitterParser::java(),
            engine,
        }
    }

    /// Analyze a snippet and render every view of it
    pub fn run(&self, source: &str) -> Result<PageValues> {
        // Parse
        let tree = self.parser.parse(source)?;
        if let Some(issue) = tree.errors.first() {
            return Err(AnalysisError::parse(&issue.message));
        }

        // Locate the analyzed method
        let method = tree.first_method().ok_or_else(AnalysisError::no_method)?;
        debug!(
            "analyzing {} at line {}",
            method.name().unwrap_or("<unnamed>"),
            method.line()
        );

        // Engine
        let report = self.engine.analyze(source)?;

        // Projections
        let values = PageValues {
            cfg_text: cfg_graph::print(&report.cfg),
            ast: ast_graph::project(&tree)?.render(),
            cfg: cfg_graph::project(&report.cfg).render(),
            eg: exec_graph::project(&report)?.render(),
        };
        info!(
            "analyzed {} ({} execution nodes)",
            report.method.name,
            report.exec.nodes.len()
        );
        Ok(values)
    }

    /// Human-readable description of the configured engine
    pub fn engine_description(&self) -> String {
        self.engine.describe()
    }
}
