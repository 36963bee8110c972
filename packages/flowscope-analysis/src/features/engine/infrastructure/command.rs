//! Subprocess adapter for the external symbolic-execution engine
//!
//! The engine reads the compilation unit on stdin and writes one analysis
//! report as JSON on stdout. Anything on stderr is surfaced in the error
//! when the engine fails.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::errors::{AnalysisError, Result};
use crate::features::engine::domain::AnalysisReport;
use crate::features::engine::ports::SymbolicEngine;

/// Engine reached by spawning a configured executable per request
pub struct EngineCommand {
    program: PathBuf,
    args: Vec<String>,
}

impl EngineCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }
}

impl SymbolicEngine for EngineCommand {
    fn analyze(&self, source: &str) -> Result<AnalysisReport> {
        debug!("spawning engine {}", self.program.display());
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                AnalysisError::engine(format!(
                    "failed to spawn engine {}: {}",
                    self.program.display(),
                    e
                ))
                .with_source(e)
            })?;

        // Closing stdin signals the end of the compilation unit.
        {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| AnalysisError::engine("engine stdin unavailable"))?;
            stdin.write_all(source.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AnalysisError::engine(format!(
                "engine exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let report = serde_json::from_slice(&output.stdout).map_err(|e| {
            AnalysisError::report(format!("engine produced a malformed report: {}", e))
                .with_source(e)
        })?;
        debug!("engine {} report decoded", self.program.display());
        Ok(report)
    }

    fn describe(&self) -> String {
        format!("engine command {}", self.program.display())
    }
}
