//! Batch generation from a newline-delimited text file.
//!
//! Every non-blank line becomes one PNG, numbered contiguously
//! (`qr_0001.png`, `qr_0002.png`, ...). Lines are trimmed and used verbatim
//! as payloads. The first failure aborts the run; files written before it
//! are left in place.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::BATCH_FILE_PREFIX;
use crate::session::Session;

/// Output file name for the `index`-th (1-based) batch entry.
#[must_use]
pub fn batch_file_name(index: usize) -> String {
    format!("{BATCH_FILE_PREFIX}{index:04}.png")
}

/// Non-blank, trimmed lines of `content`.
#[must_use]
pub fn payload_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Summary of a completed batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Number of files written
    pub written: usize,
    /// Directory the files were written to
    pub output_dir: PathBuf,
    /// Written files, in order
    pub files: Vec<PathBuf>,
}

/// One batch run: an input file and a destination directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchJob {
    input: PathBuf,
    output_dir: PathBuf,
}

impl BatchJob {
    /// Creates a job reading `input` and writing into `output_dir`.
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Input file.
    #[must_use]
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Destination directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Generates one PNG per non-blank input line using the session's
    /// colors and logo.
    ///
    /// The session's current code is left as the last generated one.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable input, unencodable line or write
    /// error. The message states how many files were written before it.
    pub fn run(&self, session: &mut Session) -> Result<BatchReport> {
        let content = fs::read_to_string(&self.input)
            .with_context(|| format!("Failed to read batch input: {}", self.input.display()))?;
        let lines = payload_lines(&content);

        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                self.output_dir.display()
            )
        })?;

        tracing::info!(
            "Batch: {} payload(s) from {} into {}",
            lines.len(),
            self.input.display(),
            self.output_dir.display()
        );

        let mut files = Vec::with_capacity(lines.len());
        for (index, line) in lines.iter().enumerate() {
            let path = self.output_dir.join(batch_file_name(index + 1));
            let written = files.len();

            render_line(session, line, &path).with_context(|| {
                format!(
                    "Batch aborted at line {} after writing {} file(s)",
                    index + 1,
                    written
                )
            })?;

            files.push(path);
        }

        Ok(BatchReport {
            written: files.len(),
            output_dir: self.output_dir.clone(),
            files,
        })
    }
}

fn render_line(session: &mut Session, line: &str, path: &Path) -> Result<()> {
    session.generate_from_payload(line)?;
    session.save_png(path)
}
