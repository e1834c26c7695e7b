//! System clipboard access for rendered codes.
//!
//! Copying is best effort. Without the `clipboard` feature, or when no
//! clipboard is reachable (headless session, missing display server), the
//! copy reports [`ClipboardOutcome::Unavailable`] instead of failing.

use image::{DynamicImage, RgbImage};

/// Result of a clipboard copy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardOutcome {
    /// The image is on the clipboard
    Copied,
    /// No usable clipboard; the reason is meant for the user
    Unavailable(String),
}

impl ClipboardOutcome {
    /// Message for the status line.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Copied => "QR code copied to clipboard".to_string(),
            Self::Unavailable(reason) => {
                format!("Clipboard not available ({reason}). Save as PNG instead.")
            }
        }
    }
}

/// RGBA bytes, row-major, as clipboards expect.
#[cfg_attr(not(feature = "clipboard"), allow(dead_code))]
fn rgba_bytes(image: &RgbImage) -> Vec<u8> {
    DynamicImage::ImageRgb8(image.clone()).to_rgba8().into_raw()
}

/// Places `image` on the system clipboard.
#[cfg(feature = "clipboard")]
pub fn copy_image(image: &RgbImage) -> ClipboardOutcome {
    use std::borrow::Cow;

    let data = arboard::ImageData {
        width: image.width() as usize,
        height: image.height() as usize,
        bytes: Cow::Owned(rgba_bytes(image)),
    };

    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_image(data)) {
        Ok(()) => ClipboardOutcome::Copied,
        Err(e) => {
            tracing::warn!("Clipboard copy failed: {e}");
            ClipboardOutcome::Unavailable(e.to_string())
        }
    }
}

/// Places `image` on the system clipboard.
#[cfg(not(feature = "clipboard"))]
pub fn copy_image(_image: &RgbImage) -> ClipboardOutcome {
    ClipboardOutcome::Unavailable("built without clipboard support".to_string())
}
