//! Bitmap post-processing: recoloring and logo compositing.

use image::imageops::{self, FilterType};
use image::RgbImage;

use super::LogoAsset;
use crate::models::{ColorPair, RgbColor};

/// Default logo side as a fraction of the code width.
pub const DEFAULT_LOGO_RATIO: f32 = 0.25;

/// Default background margin cleared around the logo, in pixels.
pub const DEFAULT_LOGO_PADDING: u32 = 10;

/// Largest accepted logo ratio.
///
/// At error correction level H roughly 30% of codewords may be damaged;
/// the logo side is capped at that fraction of the width.
pub const MAX_LOGO_RATIO: f32 = 0.30;

/// Size of the logo relative to the code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoPlacement {
    /// Logo side as a fraction of the code width
    pub ratio: f32,
    /// Background margin added to the logo side, in pixels
    pub padding: u32,
}

impl LogoPlacement {
    /// Logo side in pixels for a code `code_width` pixels wide, never wider
    /// than the code itself.
    #[must_use]
    pub fn logo_side(&self, code_width: u32) -> u32 {
        ((f64::from(code_width) * f64::from(self.ratio)).floor() as u32).min(code_width)
    }
}

impl Default for LogoPlacement {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_LOGO_RATIO,
            padding: DEFAULT_LOGO_PADDING,
        }
    }
}

/// Pixel rectangle painted by [`overlay_logo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoRegion {
    /// Left edge of the cleared backdrop
    pub x: i64,
    /// Top edge of the cleared backdrop
    pub y: i64,
    /// Side of the cleared backdrop (logo side + padding, clipped to the code)
    pub backdrop_side: u32,
    /// Side of the pasted logo
    pub logo_side: u32,
}

/// Maps every pixel to the foreground or background color.
///
/// A pixel is dark when all three channels are below 128; there is no
/// anti-aliasing.
pub fn recolor(bitmap: &mut RgbImage, colors: ColorPair) {
    let foreground = colors.foreground.to_pixel();
    let background = colors.background.to_pixel();

    for pixel in bitmap.pixels_mut() {
        *pixel = if RgbColor::from_pixel(pixel).is_dark() {
            foreground
        } else {
            background
        };
    }
}

/// Pastes `logo` at the center of `bitmap` over a background-colored square.
///
/// The logo is resized to a square `placement.logo_side(width)` pixels wide,
/// ignoring its aspect ratio, and its alpha channel is dropped. Nothing
/// checks that enough modules survive for the code to stay scannable.
///
/// Returns the painted region, or `None` when the logo would be empty.
pub fn overlay_logo(
    bitmap: &mut RgbImage,
    logo: &LogoAsset,
    background: RgbColor,
    placement: LogoPlacement,
) -> Option<LogoRegion> {
    let (width, height) = bitmap.dimensions();
    let logo_side = placement.logo_side(width);
    if logo_side == 0 {
        return None;
    }

    // Anything past the bitmap edge would be clipped anyway
    let backdrop_side = logo_side
        .saturating_add(placement.padding)
        .min(width.max(height));
    let backdrop = RgbImage::from_pixel(backdrop_side, backdrop_side, background.to_pixel());
    let x = centered(width, backdrop_side);
    let y = centered(height, backdrop_side);
    imageops::replace(bitmap, &backdrop, x, y);

    let resized = logo
        .image()
        .resize_exact(logo_side, logo_side, FilterType::Lanczos3)
        .to_rgb8();
    imageops::replace(
        bitmap,
        &resized,
        centered(width, logo_side),
        centered(height, logo_side),
    );

    Some(LogoRegion {
        x,
        y,
        backdrop_side,
        logo_side,
    })
}

/// Recolors `bitmap` and composites the optional logo.
#[must_use]
pub fn post_process(
    mut bitmap: RgbImage,
    colors: ColorPair,
    logo: Option<&LogoAsset>,
    placement: LogoPlacement,
) -> RgbImage {
    recolor(&mut bitmap, colors);
    if let Some(logo) = logo {
        overlay_logo(&mut bitmap, logo, colors.background, placement);
    }
    bitmap
}

/// Offset that centers `inner` inside `outer`, rounding toward negative.
fn centered(outer: u32, inner: u32) -> i64 {
    (i64::from(outer) - i64::from(inner)).div_euclid(2)
}
