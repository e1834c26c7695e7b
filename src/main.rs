//! qrsmith - styled QR code generator
//!
//! Generates QR codes for URLs, text, WiFi credentials, contact cards,
//! email, phone and SMS, with custom colors and an optional center logo.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qrsmith::branding::{APP_BINARY_NAME, APP_DESCRIPTION};
use qrsmith::cli::{BatchArgs, ConfigArgs, GenerateArgs, PayloadArgs};

/// qrsmith - styled QR code generator
#[derive(Parser, Debug)]
#[command(
    name = APP_BINARY_NAME,
    author,
    version,
    about = APP_DESCRIPTION,
    long_about = None
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a styled QR code and save it as PNG and/or SVG
    Generate(GenerateArgs),
    /// Print the payload string for a content type without rendering
    Payload(PayloadArgs),
    /// Generate one PNG per non-blank line of a text file
    Batch(BatchArgs),
    /// Manage persistent rendering defaults
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Generate(args) => args.execute(),
        Command::Payload(args) => args.execute(),
        Command::Batch(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e.message);
        std::process::exit(e.exit_code.code());
    }
}
