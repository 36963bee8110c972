/*
 * Flowscope Web - HTTP front end for the symbolic execution viewer
 *
 * - config/  : CLI flags, engine selection, default snippet
 * - page/    : template fill + escaping
 * - server/  : tiny_http accept loop
 * - assets/  : embedded template, scripts, styles, example snippet
 */

pub mod assets;
pub mod config;
pub mod page;
pub mod server;

pub use config::Cli;
pub use server::ViewerServer;
