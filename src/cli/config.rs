//! Configuration management CLI commands.

use crate::branding::APP_DISPLAY_NAME;
use crate::cli::common::{describe, parse_color, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Restore default configuration
    Reset,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Default)]
pub struct ConfigSetArgs {
    /// Default module color (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    fg: Option<String>,

    /// Default background color (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    bg: Option<String>,

    /// Pixels per module
    #[arg(long, value_name = "PIXELS")]
    box_size: Option<u32>,

    /// Quiet zone width in modules
    #[arg(long, value_name = "MODULES")]
    border: Option<u32>,

    /// Logo side as a fraction of the code width (max 0.3)
    #[arg(long, value_name = "RATIO")]
    logo_ratio: Option<f32>,

    /// Background margin around the logo in pixels
    #[arg(long, value_name = "PIXELS")]
    logo_padding: Option<u32>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: Option<String>,
    colors: ColorsOutput,
    render: RenderOutput,
    export: ExportOutput,
}

#[derive(Serialize, Debug)]
struct ColorsOutput {
    foreground: String,
    background: String,
}

#[derive(Serialize, Debug)]
struct RenderOutput {
    box_size: u32,
    border: u32,
    logo_ratio: f32,
    logo_padding: u32,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    png_file_name: String,
    svg_file_name: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Reset => reset(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().map_err(|e| {
            CliError::validation(format!("Failed to load configuration: {}", describe(&e)))
        })?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.fg.is_none()
            && self.bg.is_none()
            && self.box_size.is_none()
            && self.border.is_none()
            && self.logo_ratio.is_none()
            && self.logo_padding.is_none()
    }

    /// Applies the given values to `config`, validating the result.
    ///
    /// `config` is left untouched when any value is rejected.
    fn apply(&self, config: &mut Config) -> CliResult<()> {
        let mut updated = config.clone();

        if let Some(color) = parse_color(self.fg.as_deref())? {
            updated.colors.foreground = color;
        }
        if let Some(color) = parse_color(self.bg.as_deref())? {
            updated.colors.background = color;
        }

        if let Some(box_size) = self.box_size {
            updated.render.box_size = box_size;
        }
        if let Some(border) = self.border {
            updated.render.border = border;
        }
        if let Some(ratio) = self.logo_ratio {
            updated.render.logo_ratio = ratio;
        }
        if let Some(padding) = self.logo_padding {
            updated.render.logo_padding = padding;
        }

        updated
            .validate()
            .map_err(|e| CliError::validation(describe(&e)))?;
        *config = updated;
        Ok(())
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --fg, --bg, --box-size, --border, --logo-ratio, or --logo-padding",
            ));
        }

        let mut config = Config::load().unwrap_or_default();
        self.apply(&mut config)?;

        config.save().map_err(|e| {
            CliError::io(format!("Failed to save configuration: {}", describe(&e)))
        })?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn reset() -> CliResult<()> {
    Config::default().save().map_err(|e| {
        CliError::io(format!("Failed to save configuration: {}", describe(&e)))
    })?;

    println!("Configuration reset to defaults.");
    Ok(())
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        path: Config::config_file_path()
            .ok()
            .map(|p| p.to_string_lossy().to_string()),
        colors: ColorsOutput {
            foreground: config.colors.foreground.to_hex(),
            background: config.colors.background.to_hex(),
        },
        render: RenderOutput {
            box_size: config.render.box_size,
            border: config.render.border,
            logo_ratio: config.render.logo_ratio,
            logo_padding: config.render.logo_padding,
        },
        export: ExportOutput {
            png_file_name: config.export.png_file_name.clone(),
            svg_file_name: config.export.svg_file_name.clone(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {}", e)))?;

    println!("{}", json);
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{} Configuration", APP_DISPLAY_NAME);
    println!("{}", title);
    println!("{}", "=".repeat(title.len()));
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("File: {}", path.display());
        println!();
    }

    println!("Colors:");
    println!("  Foreground: {}", config.colors.foreground);
    println!("  Background: {}", config.colors.background);
    println!();

    println!("Render:");
    println!("  Box Size: {} px", config.render.box_size);
    println!("  Border: {} modules", config.render.border);
    println!("  Logo Ratio: {}", config.render.logo_ratio);
    println!("  Logo Padding: {} px", config.render.logo_padding);
    println!();

    println!("Export:");
    println!("  PNG File Name: {}", config.export.png_file_name);
    println!("  SVG File Name: {}", config.export.svg_file_name);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RgbColor;

    #[test]
    fn test_set_args_empty() {
        assert!(ConfigSetArgs::default().is_empty());
        assert!(!ConfigSetArgs {
            border: Some(4),
            ..ConfigSetArgs::default()
        }
        .is_empty());
    }

    #[test]
    fn test_apply_values() {
        let mut config = Config::new();
        let args = ConfigSetArgs {
            fg: Some("#102030".to_string()),
            box_size: Some(6),
            logo_ratio: Some(0.2),
            ..ConfigSetArgs::default()
        };

        args.apply(&mut config).unwrap();
        assert_eq!(config.colors.foreground, RgbColor::new(0x10, 0x20, 0x30));
        assert_eq!(config.render.box_size, 6);
        assert!((config.render.logo_ratio - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_apply_rejects_invalid_values() {
        let mut config = Config::new();

        let ratio = ConfigSetArgs {
            logo_ratio: Some(0.6),
            ..ConfigSetArgs::default()
        };
        assert!(ratio.apply(&mut config).is_err());

        let box_size = ConfigSetArgs {
            box_size: Some(0),
            ..ConfigSetArgs::default()
        };
        assert!(box_size.apply(&mut config).is_err());

        let color = ConfigSetArgs {
            bg: Some("#12345".to_string()),
            ..ConfigSetArgs::default()
        };
        assert!(color.apply(&mut config).is_err());

        let huge_box = ConfigSetArgs {
            box_size: Some(200_000_000),
            ..ConfigSetArgs::default()
        };
        assert!(huge_box.apply(&mut config).is_err());

        let huge_padding = ConfigSetArgs {
            logo_padding: Some(u32::MAX),
            ..ConfigSetArgs::default()
        };
        assert!(huge_padding.apply(&mut config).is_err());

        let huge_border = ConfigSetArgs {
            fg: Some("#102030".to_string()),
            border: Some(1_000_000),
            ..ConfigSetArgs::default()
        };
        assert!(huge_border.apply(&mut config).is_err());

        assert_eq!(config, Config::new());
    }
}
