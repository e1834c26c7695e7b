//! Thin wrapper over the `qrcode` crate.
//!
//! Symbol encoding (segmenting, error correction, masking) is delegated
//! entirely to `qrcode`. This module only turns the resulting module grid
//! into a monochrome raster or an SVG document.

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use qrcode::render::svg;
use qrcode::{Color, EcLevel, QrCode};

use super::RenderSettings;

const DARK: Rgb<u8> = Rgb([0, 0, 0]);
const LIGHT: Rgb<u8> = Rgb([255, 255, 255]);

/// Largest raster or SVG side, in pixels.
pub const MAX_BITMAP_SIDE: u32 = 20_000;

const SVG_DARK: &str = "#000000";
const SVG_LIGHT: &str = "#ffffff";

/// Grid of encoded modules, `true` for dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Modules per side.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Whether the module at column `x`, row `y` is dark.
    #[must_use]
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules[y * self.width + x]
    }

    /// Rasterizes the grid: black modules on white, `box_size` pixels per
    /// module, surrounded by `border` light modules.
    ///
    /// # Errors
    ///
    /// Fails when the side would exceed [`MAX_BITMAP_SIDE`] pixels.
    pub fn to_bitmap(&self, box_size: u32, border: u32) -> Result<RgbImage> {
        let side = bitmap_side(self.width, box_size, border)?;

        Ok(RgbImage::from_fn(side, side, |px, py| {
            let module_x = (px / box_size).checked_sub(border);
            let module_y = (py / box_size).checked_sub(border);
            match (module_x, module_y) {
                (Some(x), Some(y))
                    if (x as usize) < self.width
                        && (y as usize) < self.width
                        && self.is_dark(x as usize, y as usize) =>
                {
                    DARK
                }
                _ => LIGHT,
            }
        }))
    }
}

/// Side in pixels of a `modules`-wide symbol with a `border`-module quiet zone.
fn bitmap_side(modules: usize, box_size: u32, border: u32) -> Result<u32> {
    if box_size == 0 {
        anyhow::bail!("box_size must be at least 1 pixel");
    }

    u32::try_from(modules)
        .ok()
        .and_then(|modules| border.checked_mul(2)?.checked_add(modules))
        .and_then(|span| span.checked_mul(box_size))
        .filter(|side| *side <= MAX_BITMAP_SIDE)
        .with_context(|| {
            format!(
                "A {modules} module code with box_size {box_size} and border {border} \
                 exceeds {MAX_BITMAP_SIDE} pixels per side"
            )
        })
}

/// Encodes payloads into QR symbols and renders them unstyled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrEncoder {
    ec_level: EcLevel,
    box_size: u32,
    border: u32,
}

impl QrEncoder {
    /// Creates an encoder from render settings.
    #[must_use]
    pub const fn new(settings: &RenderSettings) -> Self {
        Self {
            ec_level: settings.ec_level,
            box_size: settings.box_size,
            border: settings.border,
        }
    }

    /// Encodes `payload`, choosing the smallest version that fits.
    ///
    /// # Errors
    ///
    /// Fails when the payload exceeds QR capacity at the configured
    /// error correction level.
    pub fn encode(&self, payload: &str) -> Result<QrMatrix> {
        let code = self.symbol(payload)?;
        let modules = code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect();

        Ok(QrMatrix {
            width: code.width(),
            modules,
        })
    }

    /// Renders `payload` as a black-on-white bitmap.
    pub fn render_bitmap(&self, payload: &str) -> Result<RgbImage> {
        self.encode(payload)?.to_bitmap(self.box_size, self.border)
    }

    /// Renders `payload` as a path-based SVG document.
    ///
    /// Always black on white: colors and logo are raster-only. The module
    /// path is drawn without the renderer's own quiet zone and shifted by
    /// `border` modules inside an outer document, so both exports share the
    /// same geometry.
    pub fn render_svg(&self, payload: &str) -> Result<String> {
        let code = self.symbol(payload)?;
        let side = bitmap_side(code.width(), self.box_size, self.border)?;
        let offset = self.border * self.box_size;

        let symbol = code
            .render::<svg::Color<'_>>()
            .module_dimensions(self.box_size, self.box_size)
            .dark_color(svg::Color(SVG_DARK))
            .light_color(svg::Color(SVG_LIGHT))
            .quiet_zone(false)
            .build();
        // Drop the XML declaration so the symbol can be nested
        let symbol = symbol.find("<svg").map_or(symbol.as_str(), |start| &symbol[start..]);

        Ok(format!(
            concat!(
                r#"<?xml version="1.0" standalone="yes"?>"#,
                r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{side}" height="{side}" viewBox="0 0 {side} {side}" shape-rendering="crispEdges">"#,
                r#"<rect x="0" y="0" width="{side}" height="{side}" fill="{light}"/>"#,
                r#"<g transform="translate({offset},{offset})">{symbol}</g>"#,
                "</svg>"
            ),
            side = side,
            light = SVG_LIGHT,
            offset = offset,
            symbol = symbol,
        ))
    }

    fn symbol(&self, payload: &str) -> Result<QrCode> {
        QrCode::with_error_correction_level(payload.as_bytes(), self.ec_level).with_context(|| {
            format!(
                "Failed to encode {} byte payload as a QR code",
                payload.len()
            )
        })
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new(&RenderSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_version_one() {
        let matrix = QrEncoder::default().encode("hello").unwrap();
        // Version 1 symbol
        assert_eq!(matrix.width(), 21);
        // Finder pattern corner is always dark
        assert!(matrix.is_dark(0, 0));
    }

    #[test]
    fn test_bitmap_dimensions_and_colors() {
        let encoder = QrEncoder::default();
        let bitmap = encoder.render_bitmap("hello").unwrap();

        // (21 modules + 2 * 2 border) * 10 px
        assert_eq!(bitmap.dimensions(), (250, 250));
        assert!(bitmap.pixels().all(|p| *p == DARK || *p == LIGHT));

        // Border is light, first finder module is dark
        assert_eq!(*bitmap.get_pixel(0, 0), LIGHT);
        assert_eq!(*bitmap.get_pixel(19, 19), LIGHT);
        assert_eq!(*bitmap.get_pixel(20, 20), DARK);
        assert_eq!(*bitmap.get_pixel(29, 29), DARK);
    }

    #[test]
    fn test_custom_geometry() {
        let settings = RenderSettings {
            box_size: 3,
            border: 0,
            ..RenderSettings::default()
        };
        let bitmap = QrEncoder::new(&settings).render_bitmap("hello").unwrap();
        assert_eq!(bitmap.dimensions(), (63, 63));
        assert_eq!(*bitmap.get_pixel(0, 0), DARK);
    }

    #[test]
    fn test_payload_too_long_fails() {
        let payload = "x".repeat(4000);
        let err = QrEncoder::default().encode(&payload).unwrap_err();
        assert!(err.to_string().contains("4000 byte payload"));
    }

    #[test]
    fn test_svg_is_monochrome_path() {
        let svg = QrEncoder::default().render_svg("hello").unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<path"));
        assert!(svg.contains("#000000"));
        assert!(svg.contains("#ffffff"));
        assert_eq!(svg.matches("<?xml").count(), 1);
    }

    #[test]
    fn test_svg_uses_configured_border() {
        // Same 250px side as the raster: (21 + 2 * 2) * 10
        let svg = QrEncoder::default().render_svg("hello").unwrap();
        assert!(svg.contains(r#"viewBox="0 0 250 250""#));
        assert!(svg.contains("translate(20,20)"));

        let settings = RenderSettings {
            box_size: 4,
            border: 0,
            ..RenderSettings::default()
        };
        let svg = QrEncoder::new(&settings).render_svg("hello").unwrap();
        assert!(svg.contains(r#"viewBox="0 0 84 84""#));
        assert!(svg.contains("translate(0,0)"));
    }

    #[test]
    fn test_oversized_geometry_is_an_error() {
        let matrix = QrEncoder::default().encode("hello").unwrap();

        let err = matrix.to_bitmap(200_000_000, 2).unwrap_err();
        assert!(err.to_string().contains("pixels per side"));
        assert!(matrix.to_bitmap(10, u32::MAX).is_err());
        assert!(matrix.to_bitmap(0, 2).is_err());

        let settings = RenderSettings {
            box_size: 1_000,
            ..RenderSettings::default()
        };
        assert!(QrEncoder::new(&settings).render_svg("hello").is_err());
    }
}
