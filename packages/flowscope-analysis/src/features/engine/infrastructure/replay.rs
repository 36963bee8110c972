//! Replay adapter - serves a captured report instead of running an engine
//!
//! Useful to debug a recorded session: the file is re-read on every request,
//! so edits to the capture show up on the next reload.

use std::fs;
use std::path::PathBuf;

use crate::errors::{AnalysisError, Result};
use crate::features::engine::domain::AnalysisReport;
use crate::features::engine::ports::SymbolicEngine;

/// Engine stand-in replaying a report file
pub struct ReportReplay {
    path: PathBuf,
}

impl ReportReplay {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SymbolicEngine for ReportReplay {
    fn analyze(&self, _source: &str) -> Result<AnalysisReport> {
        let data = fs::read_to_string(&self.path).map_err(|e| {
            AnalysisError::engine(format!(
                "failed to read report {}: {}",
                self.path.display(),
                e
            ))
            .with_source(e)
        })?;
        serde_json::from_str(&data).map_err(|e| {
            AnalysisError::report(format!(
                "malformed report {}: {}",
                self.path.display(),
                e
            ))
            .with_source(e)
        })
    }

    fn describe(&self) -> String {
        format!("replay of {}", self.path.display())
    }
}
