//! Branding and application identity configuration.
//!
//! This module centralizes branding-related strings (names, paths, file names)
//! so the application can be renamed in one place.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "qrsmith";

/// The binary/executable name (lowercase, no spaces).
///
/// Used in command examples and help text.
pub const APP_BINARY_NAME: &str = "qrsmith";

/// The directory name for application data.
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "qrsmith";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "QRSMITH_CONFIG_DIR";

/// Short description for help text.
pub const APP_DESCRIPTION: &str =
    "Generate QR codes with custom colors and logos, export PNG/SVG, or batch-generate from a file";

/// Default file name for single PNG exports.
pub const DEFAULT_PNG_NAME: &str = "qrsmith-qrcode.png";

/// Default file name for single SVG exports.
pub const DEFAULT_SVG_NAME: &str = "qrsmith-qrcode.svg";

/// File name prefix for batch exports (`qr_0001.png`, ...).
pub const BATCH_FILE_PREFIX: &str = "qr_";
