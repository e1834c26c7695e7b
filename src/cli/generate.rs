//! Generate command: render one code and export it.

use crate::cli::common::{describe, CliError, CliResult, ContentArgs, StyleArgs};
use crate::clipboard::ClipboardOutcome;
use crate::config::Config;
use crate::models::{ContentType, QrContent};
use crate::session::Session;
use clap::Args;
use std::path::PathBuf;

/// Generate a styled QR code and save it as PNG and/or SVG
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Content type: url, text, wifi, vcard, email, phone, sms
    #[arg(value_name = "TYPE")]
    pub content_type: ContentType,

    #[command(flatten)]
    pub content: ContentArgs,

    #[command(flatten)]
    pub style: StyleArgs,

    /// Write the styled raster to this PNG file
    #[arg(long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// Write a monochrome vector version (no colors, no logo) to this SVG
    /// file, or to the configured SVG name when no file is given
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    pub svg: Option<Option<PathBuf>>,

    /// Copy the styled raster to the system clipboard
    #[arg(long)]
    pub copy: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let content = QrContent::from_fields(self.content_type, &self.content.to_fields())
            .map_err(|e| CliError::validation(describe(&e)))?;

        let config = load_config();
        let mut session = prepare_session(&config, &self.style)?;

        session
            .generate(&content)
            .map_err(|e| CliError::validation(describe(&e)))?;

        let png = self.png_target(&config);
        if let Some(path) = &png {
            session
                .save_png(path)
                .map_err(|e| CliError::io(describe(&e)))?;
            println!("✓ Saved PNG to: {}", path.display());
        }

        if let Some(path) = self.svg_target(&config) {
            session
                .save_svg(&path)
                .map_err(|e| CliError::io(describe(&e)))?;
            println!("✓ Saved SVG to: {}", path.display());
        }

        if self.copy {
            let outcome = session
                .copy_to_clipboard()
                .map_err(|e| CliError::io(describe(&e)))?;
            match outcome {
                ClipboardOutcome::Copied => println!("✓ {}", outcome.message()),
                ClipboardOutcome::Unavailable(_) => eprintln!("Note: {}", outcome.message()),
            }
        }

        Ok(())
    }

    /// PNG destination: explicit `--png`, or the configured default name
    /// when no other output was requested.
    fn png_target(&self, config: &Config) -> Option<PathBuf> {
        if self.png.is_some() {
            return self.png.clone();
        }
        if self.svg.is_none() && !self.copy {
            return Some(PathBuf::from(&config.export.png_file_name));
        }
        None
    }

    /// SVG destination: the `--svg` value, or the configured default name
    /// when `--svg` was given without one.
    fn svg_target(&self, config: &Config) -> Option<PathBuf> {
        self.svg.as_ref().map(|path| match path {
            Some(path) => path.clone(),
            None => PathBuf::from(&config.export.svg_file_name),
        })
    }
}

/// Loads the user configuration, falling back to defaults when it is
/// missing or unreadable.
pub(crate) fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring configuration: {e:#}");
        Config::default()
    })
}

/// Builds a session from config plus command-line color and logo overrides.
pub(crate) fn prepare_session(config: &Config, style: &StyleArgs) -> CliResult<Session> {
    let (fg, bg) = style.colors()?;

    let mut session = Session::from_config(config);
    if let Some(color) = fg {
        session.set_foreground(color);
    }
    if let Some(color) = bg {
        session.set_background(color);
    }

    if let Some(path) = &style.logo {
        session
            .load_logo(path)
            .map_err(|e| CliError::io(describe(&e)))?;
    }

    if !session.colors().is_dark_on_light() {
        eprintln!(
            "Warning: {} on {} is not dark on light; some scanners may fail to read it",
            session.colors().foreground,
            session.colors().background
        );
    }

    Ok(session)
}
