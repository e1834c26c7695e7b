//! Data models for QR content and styling.
//!
//! Models are independent of the encoder, the image pipeline and the CLI.

pub mod color_pair;
pub mod content;
pub mod rgb;

// Re-export all model types
pub use color_pair::ColorPair;
pub use content::{ContentFields, ContentType, QrContent, WifiEncryption};
pub use rgb::RgbColor;
