//! Shared CLI error handling and argument groups.

use clap::Args;
use std::fmt;
use std::path::PathBuf;

use crate::models::{ContentFields, RgbColor};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid arguments or configuration values
    ValidationError = 1,
    /// File system, decode or encode failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Message shown to the user
    pub message: String,
    /// Exit code for the process
    pub exit_code: ExitCode,
}

impl CliError {
    /// Invalid input from the user.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::ValidationError,
        }
    }

    /// Failure reading, decoding, encoding or writing.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Formats an `anyhow` error with its full context chain on one line.
pub fn describe(err: &anyhow::Error) -> String {
    format!("{err:#}")
}

/// Color and logo options shared by commands that render codes.
#[derive(Debug, Clone, Default, Args)]
pub struct StyleArgs {
    /// Module color (#RRGGBB), defaults to the configured color
    #[arg(long, value_name = "HEX")]
    pub fg: Option<String>,

    /// Background color (#RRGGBB), defaults to the configured color
    #[arg(long, value_name = "HEX")]
    pub bg: Option<String>,

    /// Logo image placed at the center of the code
    #[arg(long, value_name = "FILE")]
    pub logo: Option<PathBuf>,
}

impl StyleArgs {
    /// Parses the color overrides.
    pub fn colors(&self) -> CliResult<(Option<RgbColor>, Option<RgbColor>)> {
        Ok((parse_color(self.fg.as_deref())?, parse_color(self.bg.as_deref())?))
    }
}

/// Parses an optional hex color argument.
pub fn parse_color(value: Option<&str>) -> CliResult<Option<RgbColor>> {
    value
        .map(|hex| RgbColor::from_hex(hex).map_err(|e| CliError::validation(describe(&e))))
        .transpose()
}

/// Per-content-type field options.
///
/// Only the fields of the chosen content type may be given.
#[derive(Debug, Clone, Default, Args)]
pub struct ContentArgs {
    /// Web address (url)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Text content (text)
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Network name (wifi)
    #[arg(long, value_name = "SSID")]
    pub ssid: Option<String>,

    /// Network password (wifi)
    #[arg(long, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Encryption: "WPA/WPA2", "WEP" or "None" (wifi)
    #[arg(long, value_name = "MODE")]
    pub encryption: Option<String>,

    /// Given name (vcard)
    #[arg(long, value_name = "NAME")]
    pub first_name: Option<String>,

    /// Family name (vcard)
    #[arg(long, value_name = "NAME")]
    pub last_name: Option<String>,

    /// Phone number (vcard, sms)
    #[arg(long, value_name = "NUMBER")]
    pub phone: Option<String>,

    /// Email address (vcard)
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Company (vcard)
    #[arg(long, value_name = "NAME")]
    pub company: Option<String>,

    /// Recipient address (email)
    #[arg(long, value_name = "EMAIL")]
    pub address: Option<String>,

    /// Subject (email)
    #[arg(long, value_name = "TEXT")]
    pub subject: Option<String>,

    /// Body (email)
    #[arg(long, value_name = "TEXT")]
    pub body: Option<String>,

    /// Phone number (phone)
    #[arg(long, value_name = "NUMBER")]
    pub number: Option<String>,

    /// Message (sms)
    #[arg(long, value_name = "TEXT")]
    pub message: Option<String>,
}

impl ContentArgs {
    /// Collects the options into model field values.
    #[must_use]
    pub fn to_fields(&self) -> ContentFields {
        ContentFields {
            url: self.url.clone(),
            text: self.text.clone(),
            ssid: self.ssid.clone(),
            password: self.password.clone(),
            encryption: self.encryption.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            address: self.address.clone(),
            subject: self.subject.clone(),
            body: self.body.clone(),
            number: self.number.clone(),
            message: self.message.clone(),
        }
    }
}
