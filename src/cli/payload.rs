//! Payload command: print the string a code would encode.

use crate::cli::common::{describe, CliError, CliResult, ContentArgs};
use crate::models::{ContentType, QrContent};
use crate::services::build_payload;
use clap::Args;
use serde::Serialize;

/// Print the payload string for a content type without rendering
#[derive(Debug, Clone, Args)]
pub struct PayloadArgs {
    /// Content type: url, text, wifi, vcard, email, phone, sms
    #[arg(value_name = "TYPE")]
    pub content_type: ContentType,

    #[command(flatten)]
    pub content: ContentArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct PayloadOutput<'a> {
    content_type: ContentType,
    payload: &'a str,
}

impl PayloadArgs {
    /// Execute the payload command
    pub fn execute(&self) -> CliResult<()> {
        let content = QrContent::from_fields(self.content_type, &self.content.to_fields())
            .map_err(|e| CliError::validation(describe(&e)))?;
        let payload = build_payload(&content);

        if self.json {
            let output = PayloadOutput {
                content_type: self.content_type,
                payload: &payload,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize payload to JSON: {e}")))?;
            println!("{json}");
        } else {
            println!("{payload}");
        }

        Ok(())
    }
}
