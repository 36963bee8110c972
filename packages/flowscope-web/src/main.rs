//! `flowscope` binary
//!
//! ```bash
//! # live engine, spawned per request
//! flowscope --engine /path/to/engine --engine-arg --dialect=java
//!
//! # replay a captured report
//! flowscope --replay report.json --port 8080
//! ```

use anyhow::Result;
use clap::Parser;
use flowscope_analysis::AnalysisDriver;
use tracing::info;
use tracing_subscriber::EnvFilter;

use flowscope_web::{Cli, ViewerServer};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let driver = AnalysisDriver::new(cli.build_engine()?);
    info!("reports from {}", driver.engine_description());

    let server = ViewerServer::bind(&cli.bind_addr(), driver, cli.default_source())?;
    info!("listening on http://{}:{}/", cli.host, server.port());
    server.run();
    Ok(())
}
