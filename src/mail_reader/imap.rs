use anyhow::{anyhow, Result};
use async_imap::{Client, Session};
use futures::TryStreamExt;
use mailparse::{parse_headers, MailHeaderMap};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_util::compat::{Compat, TokioAsyncReadCompatExt};

use crate::mail_reader::credentials::Credentials;
use crate::mail_reader::display::MessageSummary;
use crate::mail_reader::{InboxConnector, Mailbox};
use crate::settings::{Config, ImapConfig};
use log::{debug, error, info};

pub type ImapSession = Session<Compat<tokio_native_tls::TlsStream<TcpStream>>>;

const INBOX: &str = "INBOX";

// Establish a TLS-encrypted connection to the IMAP server
async fn connect_to_server(server: &str, port: u16) -> Result<tokio_native_tls::TlsStream<TcpStream>> {
    let imap_addr = (server, port);
    let tcp_stream = TcpStream::connect(imap_addr).await?;
    let tls = tokio_native_tls::TlsConnector::from(native_tls::TlsConnector::new()?);
    let tls_stream = tls.connect(server, tcp_stream).await?;

    info!("-- connected to {}:{}", server, port);
    Ok(tls_stream)
}

// Login to the IMAP server and return an authenticated session
async fn login_to_server(
    client: Client<Compat<tokio_native_tls::TlsStream<TcpStream>>>,
    username: &str,
    password: &str,
) -> Result<ImapSession> {
    let imap_session = client
        .login(username, password)
        .await
        .map_err(|e| e.0)?;

    info!("-- logged in as {}", username);
    Ok(imap_session)
}

// Calculate the range string for fetching the most recent messages
pub fn calculate_message_range(total_messages: u32, count: u32) -> Option<String> {
    if total_messages == 0 || count == 0 {
        return None;
    }
    let start = if total_messages > count { total_messages - count + 1 } else { 1 };
    Some(format!("{}:{}", start, total_messages))
}

/// Builds the IMAP SEARCH query for one sender; quoting characters are dropped
/// so the address cannot break out of the quoted string.
pub fn from_query(sender: &str) -> String {
    let sanitized: String = sender
        .trim()
        .chars()
        .filter(|c| *c != '"' && *c != '\\' && !c.is_control())
        .collect();
    format!("FROM \"{}\"", sanitized)
}

/// Opens IMAP sessions for the monitored inbox, retrying transient failures.
#[derive(Debug, Clone)]
pub struct ImapConnector {
    imap: ImapConfig,
    credentials: Credentials,
    attempts: u32,
    retry_delay: Duration,
}

impl ImapConnector {
    pub fn new(config: &Config, credentials: Credentials) -> Self {
        ImapConnector {
            imap: config.imap.clone(),
            credentials,
            attempts: config.verification.connect_attempts.max(1),
            retry_delay: Duration::from_secs(config.verification.retry_delay_seconds),
        }
    }

    pub fn inbox_address(&self) -> &str {
        &self.credentials.username
    }

    async fn create_session(&self) -> Result<ImapSession> {
        let tls_stream = connect_to_server(&self.imap.server, self.imap.port).await?;
        let client = Client::new(tls_stream.compat());
        login_to_server(client, &self.credentials.username, &self.credentials.password).await
    }
}

impl InboxConnector for ImapConnector {
    type Session = ImapMailbox;

    async fn connect(&self) -> Result<ImapMailbox> {
        let mut last_error = None;
        for attempt in 1..=self.attempts {
            info!("Attempt {}: connecting to IMAP server {}", attempt, self.imap.server);
            match self.create_session().await {
                Ok(session) => return Ok(ImapMailbox { session }),
                Err(e) => {
                    error!("Attempt {} failed: {:#}", attempt, e);
                    last_error = Some(e);
                }
            }

            if attempt < self.attempts {
                info!("Retrying in {} seconds...", self.retry_delay.as_secs());
                tokio::time::sleep(self.retry_delay).await;
            }
        }

        let e = last_error.unwrap_or_else(|| anyhow!("no connection attempt was made"));
        Err(e.context(format!(
            "Failed to connect to the IMAP server after {} attempts",
            self.attempts
        )))
    }
}

pub struct ImapMailbox {
    session: ImapSession,
}

impl ImapMailbox {
    /// Headers of the newest `count` INBOX messages, oldest first.
    pub async fn recent_summaries(&mut self, count: u32) -> Result<Vec<MessageSummary>> {
        let mailbox_data = self.session.select(INBOX).await?;
        info!("-- {} selected", INBOX);

        let Some(range) = calculate_message_range(mailbox_data.exists, count) else {
            return Ok(Vec::new());
        };

        let messages_stream = self.session.fetch(&range, "BODY.PEEK[HEADER]").await?;
        let messages: Vec<_> = messages_stream.try_collect().await?;

        let summaries = messages
            .iter()
            .filter_map(|message| {
                let (headers, _) = parse_headers(message.header()?).ok()?;
                Some(MessageSummary {
                    seq: message.message,
                    from: headers.get_first_value("From"),
                    subject: headers.get_first_value("Subject"),
                })
            })
            .collect();
        Ok(summaries)
    }
}

impl Mailbox for ImapMailbox {
    async fn search_from(&mut self, sender: &str) -> Result<Vec<u32>> {
        self.session.select(INBOX).await?;
        let query = from_query(sender);
        debug!("-- searching {} with {}", INBOX, query);

        let mut found: Vec<u32> = self.session.search(&query).await?.into_iter().collect();
        // SEARCH answers with a set; ascending sequence order puts the newest last.
        found.sort_unstable();
        Ok(found)
    }

    async fn fetch(&mut self, seq: u32) -> Result<Option<Vec<u8>>> {
        let messages_stream = self.session.fetch(seq.to_string(), "BODY.PEEK[]").await?;
        let messages: Vec<_> = messages_stream.try_collect().await?;
        Ok(messages
            .iter()
            .find_map(|message| message.body().map(<[u8]>::to_vec)))
    }

    async fn logout(&mut self) -> Result<()> {
        // Be nice to the server and log out
        self.session.logout().await?;
        Ok(())
    }
}
