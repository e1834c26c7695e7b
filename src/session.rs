//! Per-run generation state.
//!
//! A [`Session`] owns everything a front end changes between generations:
//! the color pair, the optional logo and the single current code. The
//! payload builder and the render pipeline stay stateless; the session
//! feeds them and stores the result.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::clipboard::{self, ClipboardOutcome};
use crate::config::Config;
use crate::models::{ColorPair, QrContent, RgbColor};
use crate::render::{self, LogoAsset, QrEncoder, RenderSettings, RenderedCode};
use crate::services::build_payload;

const NOTHING_RENDERED: &str = "Generate a QR code first";

/// Colors, logo and the most recent code for one user session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    settings: RenderSettings,
    colors: ColorPair,
    logo: Option<LogoAsset>,
    current: Option<RenderedCode>,
}

impl Session {
    /// Creates an idle session with default colors and no logo.
    #[must_use]
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Creates an idle session from the user configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut session = Self::new(config.render_settings());
        session.colors = config.color_pair();
        session
    }

    /// Render settings in use.
    #[must_use]
    pub const fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Current color pair.
    #[must_use]
    pub const fn colors(&self) -> ColorPair {
        self.colors
    }

    /// Replaces both colors.
    pub fn set_colors(&mut self, colors: ColorPair) {
        self.colors = colors;
    }

    /// Sets the module color.
    pub fn set_foreground(&mut self, color: RgbColor) {
        self.colors.foreground = color;
    }

    /// Sets the background color.
    pub fn set_background(&mut self, color: RgbColor) {
        self.colors.background = color;
    }

    /// Returns to black on white.
    pub fn reset_colors(&mut self) {
        self.colors.reset();
    }

    /// Current logo, if any.
    #[must_use]
    pub const fn logo(&self) -> Option<&LogoAsset> {
        self.logo.as_ref()
    }

    /// Loads and selects a logo.
    ///
    /// On failure the previously selected logo stays selected.
    pub fn load_logo(&mut self, path: &Path) -> Result<&LogoAsset> {
        let logo = LogoAsset::load(path)?;
        Ok(self.logo.insert(logo))
    }

    /// Removes the logo.
    pub fn clear_logo(&mut self) {
        self.logo = None;
    }

    /// Most recent code, if one was generated.
    #[must_use]
    pub const fn current(&self) -> Option<&RenderedCode> {
        self.current.as_ref()
    }

    /// Whether a code has been generated.
    #[must_use]
    pub const fn is_rendered(&self) -> bool {
        self.current.is_some()
    }

    /// Builds the payload for `content` and renders it.
    pub fn generate(&mut self, content: &QrContent) -> Result<&RenderedCode> {
        let payload = build_payload(content);
        tracing::debug!("Generating {} code", content.content_type());
        self.generate_from_payload(&payload)
    }

    /// Renders a raw payload string, replacing the current code.
    pub fn generate_from_payload(&mut self, payload: &str) -> Result<&RenderedCode> {
        let code = render::render_code(payload, &self.settings, self.colors, self.logo.as_ref())?;
        Ok(self.current.insert(code))
    }

    /// Writes the current code as a styled PNG.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let code = self.require_current()?;
        code.save_png(path)?;
        tracing::info!("Saved PNG to {}", path.display());
        Ok(())
    }

    /// Writes the current payload as a monochrome SVG.
    ///
    /// The SVG is re-encoded from the payload and carries neither the
    /// session colors nor the logo.
    pub fn save_svg(&self, path: &Path) -> Result<()> {
        let code = self.require_current()?;
        let svg = QrEncoder::new(&self.settings).render_svg(code.payload())?;
        fs::write(path, svg).with_context(|| format!("Failed to write SVG: {}", path.display()))?;
        tracing::info!("Saved SVG to {}", path.display());
        Ok(())
    }

    /// Copies the current code to the system clipboard.
    ///
    /// A missing clipboard is reported through the outcome, not as an error.
    pub fn copy_to_clipboard(&self) -> Result<ClipboardOutcome> {
        let code = self.require_current()?;
        Ok(clipboard::copy_image(code.image()))
    }

    fn require_current(&self) -> Result<&RenderedCode> {
        self.current
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!(NOTHING_RENDERED))
    }
}
