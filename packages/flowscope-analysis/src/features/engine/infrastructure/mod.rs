//! Engine infrastructure - adapters for the SymbolicEngine port

mod command;
mod replay;

pub use command::EngineCommand;
pub use replay::ReportReplay;
