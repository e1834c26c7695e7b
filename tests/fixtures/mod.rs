//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the qrsmith binary
pub fn qrsmith_bin() -> &'static str {
    env!("CARGO_BIN_EXE_qrsmith")
}

/// Creates a Command with an isolated config directory and working directory.
///
/// Relative output paths (such as the default PNG name) land in `workdir`.
pub fn isolated_command(args: &[&str], config_dir: &Path, workdir: &Path) -> Command {
    let mut cmd = Command::new(qrsmith_bin());
    cmd.env("QRSMITH_CONFIG_DIR", config_dir);
    cmd.current_dir(workdir);
    cmd.args(args);
    cmd
}

/// Runs qrsmith in a fresh isolated environment rooted at `temp`.
pub fn run_isolated(args: &[&str], temp: &TempDir) -> Output {
    let config_dir = temp.path().join("config");
    isolated_command(args, &config_dir, temp.path())
        .output()
        .expect("Failed to execute command")
}

/// Writes a solid-color RGBA logo image and returns its path.
pub fn write_logo_png(dir: &Path, name: &str, side: u32, color: [u8; 4]) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(side, side, Rgba(color))
        .save(&path)
        .expect("Failed to write logo");
    path
}

/// Writes a batch input file from raw text and returns its path.
pub fn write_batch_input(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("batch.txt");
    fs::write(&path, contents).expect("Failed to write batch input");
    path
}

/// Decoded dimensions and pixels of a PNG written by the CLI.
pub fn read_png(path: &Path) -> image::RgbImage {
    image::open(path)
        .unwrap_or_else(|e| panic!("Failed to open {}: {e}", path.display()))
        .to_rgb8()
}

/// Asserts the process exited with `code`, showing stderr on failure.
pub fn assert_exit_code(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "Unexpected exit code. stdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}
