//! Batch command: one PNG per line of a text file.

use crate::cli::common::{describe, CliError, CliResult, StyleArgs};
use crate::cli::generate::{load_config, prepare_session};
use crate::services::BatchJob;
use clap::Args;
use std::path::PathBuf;

/// Generate numbered PNG codes (qr_0001.png, ...) from each non-blank line of a file
#[derive(Debug, Clone, Args)]
pub struct BatchArgs {
    /// Newline-delimited text file, one payload per line
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Directory to write the PNG files into (created if missing)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: PathBuf,

    #[command(flatten)]
    pub style: StyleArgs,
}

impl BatchArgs {
    /// Execute the batch command
    pub fn execute(&self) -> CliResult<()> {
        if !self.input.is_file() {
            return Err(CliError::io(format!(
                "Input file not found: {}",
                self.input.display()
            )));
        }

        let config = load_config();
        let mut session = prepare_session(&config, &self.style)?;

        let report = BatchJob::new(&self.input, &self.out_dir)
            .run(&mut session)
            .map_err(|e| CliError::io(format!("Batch processing failed: {}", describe(&e))))?;

        println!(
            "✓ Generated {} QR code(s) in: {}",
            report.written,
            report.output_dir.display()
        );

        Ok(())
    }
}
