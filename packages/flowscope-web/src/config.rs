//! CLI configuration
//!
//! One of `--engine` or `--replay` selects where analysis reports come from;
//! everything else has a sensible localhost default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use flowscope_analysis::{EngineCommand, ReportReplay, SymbolicEngine};
use tracing::error;

use crate::assets::EXAMPLE_SOURCE;

/// Interactive viewer for symbolic-execution debug graphs
#[derive(Parser, Debug)]
#[command(name = "flowscope")]
#[command(version)]
#[command(about = "Serves AST, CFG and exploded-graph views of a source snippet", long_about = None)]
pub struct Cli {
    /// Port to listen on
    #[arg(long, default_value_t = 9999)]
    pub port: u16,

    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Symbolic engine executable, spawned once per request
    #[arg(long, required_unless_present = "replay", conflicts_with = "replay")]
    pub engine: Option<PathBuf>,

    /// Extra argument passed to the engine (repeatable)
    #[arg(long = "engine-arg", allow_hyphen_values = true)]
    pub engine_args: Vec<String>,

    /// Serve a captured report file instead of running an engine
    #[arg(long)]
    pub replay: Option<PathBuf>,

    /// File shown in the editor on first load
    #[arg(long)]
    pub source: Option<PathBuf>,
}

impl Cli {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Engine adapter selected by the flags
    pub fn build_engine(&self) -> anyhow::Result<Box<dyn SymbolicEngine>> {
        if let Some(path) = &self.replay {
            return Ok(Box::new(ReportReplay::new(path)));
        }
        let engine = self
            .engine
            .as_ref()
            .context("either --engine or --replay is required")?;
        Ok(Box::new(
            EngineCommand::new(engine).with_args(self.engine_args.clone()),
        ))
    }

    /// Snippet shown on first load: the configured file, else the embedded
    /// example. An unreadable file degrades to a comment naming it.
    pub fn default_source(&self) -> String {
        match &self.source {
            Some(path) => read_source(path),
            None => EXAMPLE_SOURCE.to_string(),
        }
    }
}

fn read_source(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            error!("cannot read {}: {}", path.display(), e);
            format!(
                "// Unable to read file at location:\n// \"{}\"\n",
                path.display()
            )
        }
    }
}
