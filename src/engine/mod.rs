//! Engine module: CLI argument parsing and run orchestration.

pub mod arg_parser;
pub mod handlers;

pub use arg_parser::Cli;
pub use handlers::{build_filters, handle_run};
