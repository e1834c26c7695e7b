//! QR rendering pipeline.
//!
//! A payload string is encoded by [`QrEncoder`] into a black-on-white bitmap,
//! then [`post_process`] recolors it and composites an optional logo. The
//! result is a [`RenderedCode`], which can be written as PNG or re-encoded
//! as SVG.

pub mod encoder;
pub mod logo;
pub mod postprocess;

pub use encoder::{QrEncoder, QrMatrix, MAX_BITMAP_SIDE};
pub use logo::LogoAsset;
pub use postprocess::{
    overlay_logo, post_process, recolor, LogoPlacement, LogoRegion, DEFAULT_LOGO_PADDING,
    DEFAULT_LOGO_RATIO, MAX_LOGO_RATIO,
};

use anyhow::{Context, Result};
use image::{ImageFormat, RgbImage};
use qrcode::EcLevel;
use std::path::Path;

use crate::models::ColorPair;

/// Encoder and compositing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Error correction level, fixed at H by default
    pub ec_level: EcLevel,
    /// Pixels per module
    pub box_size: u32,
    /// Quiet zone width in modules
    pub border: u32,
    /// Logo size and margin
    pub logo: LogoPlacement,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::H,
            box_size: 10,
            border: 2,
            logo: LogoPlacement::default(),
        }
    }
}

/// A finished, styled QR bitmap and the payload it encodes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCode {
    payload: String,
    image: RgbImage,
}

impl RenderedCode {
    /// The encoded payload.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// The styled bitmap.
    #[must_use]
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Bitmap width and height in pixels.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Writes the bitmap to `path` as PNG.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .with_context(|| format!("Failed to write PNG: {}", path.display()))
    }
}

/// Runs the full pipeline for one payload.
pub fn render_code(
    payload: &str,
    settings: &RenderSettings,
    colors: ColorPair,
    logo: Option<&LogoAsset>,
) -> Result<RenderedCode> {
    let bitmap = QrEncoder::new(settings).render_bitmap(payload)?;
    let image = post_process(bitmap, colors, logo, settings.logo);

    tracing::debug!(
        "Rendered {}x{} code for {} byte payload (logo: {})",
        image.width(),
        image.height(),
        payload.len(),
        logo.map_or("none", LogoAsset::name)
    );

    Ok(RenderedCode {
        payload: payload.to_string(),
        image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RgbColor;
    use image::Rgb;
    use tempfile::TempDir;

    #[test]
    fn test_render_code_applies_colors() {
        let colors = ColorPair::new(RgbColor::new(255, 0, 0), RgbColor::new(0, 255, 0));
        let code = render_code("hello", &RenderSettings::default(), colors, None).unwrap();

        assert_eq!(code.payload(), "hello");
        assert_eq!(code.dimensions(), (250, 250));
        assert!(code
            .image()
            .pixels()
            .all(|p| *p == Rgb([255, 0, 0]) || *p == Rgb([0, 255, 0])));
    }

    #[test]
    fn test_save_png() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("code.png");
        let code = render_code(
            "hello",
            &RenderSettings::default(),
            ColorPair::default(),
            None,
        )
        .unwrap();

        code.save_png(&path).unwrap();
        assert_eq!(image::open(&path).unwrap().width(), 250);
    }

    #[test]
    fn test_save_png_to_missing_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("code.png");
        let code = render_code(
            "hello",
            &RenderSettings::default(),
            ColorPair::default(),
            None,
        )
        .unwrap();

        let err = code.save_png(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to write PNG"));
    }
}
