mod logging;
mod mail_reader;
mod settings;
mod verification;
mod tests;
mod web;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tera::Tera;

use mail_reader::credentials::{get_credentials, CredentialStore};
use mail_reader::imap::ImapConnector;
use mail_reader::{display, InboxConnector, Mailbox};
use verification::extractor::ExtractorRegistry;
use verification::BookingVerifier;

#[derive(Parser, Debug)]
#[command(
    name = "ticketproof",
    about = "Verify forwarded ticket booking confirmations against a monitored inbox"
)]
struct Cli {
    /// Path to the YAML settings file
    #[arg(short, long, default_value = settings::DEFAULT_SETTINGS_PATH)]
    config: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Also append log lines to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the verification form over HTTP
    Serve,
    /// Verify one forwarded booking and print the outcome as JSON
    Verify {
        /// Address the booking mail was sent to and forwarded from
        #[arg(long)]
        email: String,
        /// Platform identifier, e.g. bookmyshow
        #[arg(long)]
        platform: String,
    },
    /// Log in to the inbox and log out again
    CheckConnection,
    /// List the most recent inbox messages
    Recent {
        #[arg(long, default_value_t = 5)]
        count: u32,
    },
}

fn build_verifier(config: &settings::Config) -> Result<BookingVerifier<ImapConnector>> {
    let credentials = get_credentials(&config.imap.username, &CredentialStore::default())?;
    let connector = ImapConnector::new(config, credentials);
    let registry = ExtractorRegistry::with_default_platforms()
        .context("Cannot compile platform extraction rules")?;
    Ok(BookingVerifier::new(connector, config, Arc::new(registry)))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logger(&cli.log_level, cli.log_file.as_deref())?;

    let config = settings::load_settings(&cli.config)?;
    let verifier = build_verifier(&config)?;

    match cli.command {
        Commands::Serve => {
            let tera = Tera::new("templates/**/*.html").context("Cannot load templates")?;
            let state = web::AppState { verifier, tera };
            web::start_web_server(&config.server, state).await
        }
        Commands::Verify { email, platform } => {
            let outcome = verifier.verify(&email, &platform).await;
            display::display_json(&outcome);
            Ok(())
        }
        Commands::CheckConnection => {
            let mut session = verifier.connector().connect().await?;
            session.logout().await?;
            println!("Email connection successful!");
            Ok(())
        }
        Commands::Recent { count } => {
            let mut session = verifier.connector().connect().await?;
            let summaries = session.recent_summaries(count).await;
            session.logout().await?;
            display::display_summaries(&summaries?);
            Ok(())
        }
    }
}
