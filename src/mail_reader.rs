use anyhow::Result;

pub mod credentials;
pub mod display;
pub mod imap;
pub mod message;

/// The read-only mailbox operations needed to find a forwarded booking mail.
#[allow(async_fn_in_trait)]
pub trait Mailbox {
    /// Sequence numbers of INBOX messages whose From header matches `sender`.
    async fn search_from(&mut self, sender: &str) -> Result<Vec<u32>>;

    /// Full RFC822 content of one message, `None` if the server returned no body.
    async fn fetch(&mut self, seq: u32) -> Result<Option<Vec<u8>>>;

    async fn logout(&mut self) -> Result<()>;
}

/// Something that can open an authenticated [`Mailbox`] session.
#[allow(async_fn_in_trait)]
pub trait InboxConnector {
    type Session: Mailbox;

    async fn connect(&self) -> Result<Self::Session>;
}
