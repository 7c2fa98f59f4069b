use anyhow::Result;
use log::{info, warn};
use serde::Serialize;

use crate::mail_reader::message::RawMessage;
use crate::mail_reader::Mailbox;

/// Why no usable forward was found. These are ordinary outcomes, not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFound {
    NoEmails,
    NotAForward,
    EmptyMessage,
}

impl NotFound {
    pub fn describe(&self) -> &'static str {
        match self {
            NotFound::NoEmails => "no emails found",
            NotFound::NotAForward => "latest email is not a forward",
            NotFound::EmptyMessage => "latest email has no content",
        }
    }
}

#[derive(Debug)]
pub enum Located {
    Found(RawMessage),
    NotFound(NotFound),
    /// The newest message could not be decoded as MIME.
    Unreadable,
}

/// Finds the newest message from `sender` and accepts it only if it is a forward.
/// Older messages are never considered, even when they are forwards.
pub async fn locate<M: Mailbox>(mailbox: &mut M, sender: &str) -> Result<Located> {
    let matches = mailbox.search_from(sender).await?;
    let Some(latest) = matches.iter().copied().max() else {
        info!("No emails found from {}", sender);
        return Ok(Located::NotFound(NotFound::NoEmails));
    };

    let Some(raw) = mailbox.fetch(latest).await? else {
        info!("Message {} from {} came back without a body", latest, sender);
        return Ok(Located::NotFound(NotFound::EmptyMessage));
    };
    let message = match RawMessage::parse(&raw) {
        Ok(message) => message,
        Err(e) => {
            warn!("Message {} from {} could not be parsed: {:#}", latest, sender, e);
            return Ok(Located::Unreadable);
        }
    };

    if !message.is_forward() {
        info!("The latest email from {} is not a forwarded email", sender);
        return Ok(Located::NotFound(NotFound::NotAForward));
    }

    info!("Email found: {}", message.subject.as_deref().unwrap_or_default());
    Ok(Located::Found(message))
}
