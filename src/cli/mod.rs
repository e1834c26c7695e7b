//! CLI command handlers for qrsmith.
//!
//! Each subcommand collects its inputs, drives a [`crate::session::Session`]
//! and reports results on stdout; failures become a [`CliError`] carrying the
//! process exit code.

pub mod batch;
pub mod common;
pub mod config;
pub mod generate;
pub mod payload;

// Re-export types used by main.rs and tests
pub use batch::BatchArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
pub use payload::PayloadArgs;
