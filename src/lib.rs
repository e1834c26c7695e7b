//! qrsmith library
//!
//! Builds standards-conformant QR payloads for common content types
//! (URL, text, WiFi, vCard, email, phone, SMS), renders them with custom
//! colors and an optional centered logo, and exports the result as PNG,
//! SVG or a clipboard image.

// Module declarations
pub mod branding;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod models;
pub mod render;
pub mod services;
pub mod session;
