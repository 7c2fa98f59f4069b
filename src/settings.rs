use serde::Deserialize;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use anyhow::{Context, Result};
use backtrace::Backtrace;
use log::{error, info};

pub const DEFAULT_SETTINGS_PATH: &str = "src/resources/settings.yaml";

// Main configuration struct
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub imap: ImapConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub verification: VerificationConfig,
    #[serde(default)]
    pub platforms: PlatformProfiles,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImapConfig {
    pub server: String,
    #[serde(default = "default_imap_port")]
    pub port: u16,
    pub username: String,
}

// REST server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct VerificationConfig {
    pub connect_attempts: u32,
    pub retry_delay_seconds: u64,
    /// Wait between connecting and searching, so a just-forwarded mail can land.
    pub propagation_delay_seconds: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        VerificationConfig {
            connect_attempts: 3,
            retry_delay_seconds: 5,
            propagation_delay_seconds: 5,
        }
    }
}

/// Platform identifier to the address its booking confirmations are sent from.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct PlatformProfiles(HashMap<String, String>);

impl Default for PlatformProfiles {
    fn default() -> Self {
        PlatformProfiles::from_pairs([
            ("bookmyshow", "tickets@bookmyshow.email"),
            ("zomato", "eventsupport@zomato.com"),
            ("paytminsider", "purchases@insider.in"),
        ])
    }
}

impl PlatformProfiles {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        PlatformProfiles(
            pairs
                .into_iter()
                .map(|(platform, email)| (normalize_platform(platform), email.to_string()))
                .collect(),
        )
    }

    pub fn platform_email(&self, platform: &str) -> Option<&str> {
        self.0.get(&normalize_platform(platform)).map(String::as_str)
    }

    /// Sorted platform identifiers, for listings.
    pub fn platforms(&self) -> Vec<&str> {
        let mut platforms: Vec<&str> = self.0.keys().map(String::as_str).collect();
        platforms.sort_unstable();
        platforms
    }
}

pub fn normalize_platform(platform: &str) -> String {
    platform.trim().to_lowercase()
}

fn default_imap_port() -> u16 {
    993
}

impl Config {
    /// Environment wins over the YAML file for the server address and account.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(server) = lookup("IMAP_SERVER").filter(|s| !s.trim().is_empty()) {
            self.imap.server = server;
        }
        if let Some(account) = lookup("EMAIL_ACCOUNT").filter(|s| !s.trim().is_empty()) {
            self.imap.username = account;
        }
    }
}

pub fn parse_settings(yaml: &str) -> Result<Config> {
    let mut config: Config = serde_yaml::from_str(yaml)?;
    // Keys in the YAML map may be written in any case.
    config.platforms = PlatformProfiles(
        config
            .platforms
            .0
            .into_iter()
            .map(|(platform, email)| (normalize_platform(&platform), email))
            .collect(),
    );
    Ok(config)
}

pub fn load_settings(path: &Path) -> Result<Config> {
    let file = File::open(path).inspect_err(|err| {
        error!("Error: {}", err);
        error!("Backtrace:\n{:?}", Backtrace::new());
    });
    let file = file.with_context(|| format!("Cannot find settings at {}", path.display()))?;

    let mut yaml = String::new();
    BufReader::new(file)
        .read_to_string(&mut yaml)
        .with_context(|| format!("Cannot read settings at {}", path.display()))?;

    let mut config = parse_settings(&yaml)
        .inspect_err(|err| {
            error!("Error: {}", err);
            error!("Backtrace:\n{:?}", Backtrace::new());
        })
        .context("Cannot deserialize settings")?;

    config.apply_overrides(|key| std::env::var(key).ok());
    info!(
        "Configuration loaded: imap server {}:{}, inbox {}, {} platform(s)",
        config.imap.server,
        config.imap.port,
        config.imap.username,
        config.platforms.platforms().len()
    );
    Ok(config)
}
