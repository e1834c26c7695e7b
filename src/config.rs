//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::branding::{APP_DATA_DIR, CONFIG_DIR_ENV};
use crate::models::{ColorPair, RgbColor};
use crate::render::{LogoPlacement, RenderSettings, MAX_LOGO_RATIO};

/// Largest accepted `box_size`, in pixels per module.
pub const MAX_BOX_SIZE: u32 = 100;

/// Largest accepted quiet zone, in modules.
pub const MAX_BORDER: u32 = 40;

/// Largest accepted logo padding, in pixels.
pub const MAX_LOGO_PADDING: u32 = 1_000;

/// Default colors applied to new sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Module color
    pub foreground: RgbColor,
    /// Background color
    pub background: RgbColor,
}

impl Default for ColorConfig {
    fn default() -> Self {
        let pair = ColorPair::default();
        Self {
            foreground: pair.foreground,
            background: pair.background,
        }
    }
}

/// Raster geometry and logo placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Pixels per module
    pub box_size: u32,
    /// Quiet zone width in modules
    pub border: u32,
    /// Logo side as a fraction of the code width
    pub logo_ratio: f32,
    /// Extra pixels of background cleared around the logo
    pub logo_padding: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let settings = RenderSettings::default();
        Self {
            box_size: settings.box_size,
            border: settings.border,
            logo_ratio: settings.logo.ratio,
            logo_padding: settings.logo.padding,
        }
    }
}

/// Export file naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File name used when `generate` is given no explicit output
    pub png_file_name: String,
    /// Suggested SVG file name
    pub svg_file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            png_file_name: crate::branding::DEFAULT_PNG_NAME.to_string(),
            svg_file_name: crate::branding::DEFAULT_SVG_NAME.to_string(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/qrsmith/config.toml`
/// - macOS: `~/Library/Application Support/qrsmith/config.toml`
/// - Windows: `%APPDATA%\qrsmith\config.toml`
///
/// The directory can be overridden with the `QRSMITH_CONFIG_DIR`
/// environment variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Default colors
    pub colors: ColorConfig,
    /// Rendering parameters
    pub render: RenderConfig,
    /// Export file names
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Honors `QRSMITH_CONFIG_DIR`, otherwise the platform config directory.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::info!("Saved configuration to {}", config_path.display());
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `box_size` is within `1..=MAX_BOX_SIZE`
    /// - `border` and `logo_padding` are at most `MAX_BORDER`/`MAX_LOGO_PADDING`
    /// - `logo_ratio` is within `(0, MAX_LOGO_RATIO]`
    /// - export file names are non-empty
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_BOX_SIZE).contains(&self.render.box_size) {
            anyhow::bail!(
                "box_size must be between 1 and {MAX_BOX_SIZE} pixels (got {})",
                self.render.box_size
            );
        }
        if self.render.border > MAX_BORDER {
            anyhow::bail!(
                "border must be at most {MAX_BORDER} modules (got {})",
                self.render.border
            );
        }
        if self.render.logo_padding > MAX_LOGO_PADDING {
            anyhow::bail!(
                "logo_padding must be at most {MAX_LOGO_PADDING} pixels (got {})",
                self.render.logo_padding
            );
        }

        validate_logo_ratio(self.render.logo_ratio)?;

        if self.export.png_file_name.trim().is_empty() {
            anyhow::bail!("png_file_name cannot be empty");
        }
        if self.export.svg_file_name.trim().is_empty() {
            anyhow::bail!("svg_file_name cannot be empty");
        }

        Ok(())
    }

    /// Session colors from the configured defaults.
    #[must_use]
    pub const fn color_pair(&self) -> ColorPair {
        ColorPair::new(self.colors.foreground, self.colors.background)
    }

    /// Render settings from the configured values.
    #[must_use]
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            box_size: self.render.box_size,
            border: self.render.border,
            logo: LogoPlacement {
                ratio: self.render.logo_ratio,
                padding: self.render.logo_padding,
            },
            ..RenderSettings::default()
        }
    }
}

/// Checks a logo-to-code width ratio against the error correction budget.
pub fn validate_logo_ratio(ratio: f32) -> Result<()> {
    if !(ratio > 0.0 && ratio <= MAX_LOGO_RATIO) {
        anyhow::bail!(
            "logo_ratio must be greater than 0 and at most {MAX_LOGO_RATIO} (got {ratio})"
        );
    }
    Ok(())
}
