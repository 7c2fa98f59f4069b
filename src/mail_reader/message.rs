use anyhow::Result;
use mailparse::{parse_mail, MailHeaderMap, ParsedMail};
use serde::Serialize;
use log::{debug, warn};

use crate::verification::unwrapper::{contains_marker, PRIMARY_MARKER};

/// A fetched mail item, kept only until its body has been extracted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RawMessage {
    pub from: Option<String>,
    pub to: Option<String>,
    pub subject: Option<String>,
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentPart {
    pub content_type: String,
    pub text: String,
}

impl ContentPart {
    fn is_plain_text(&self) -> bool {
        self.content_type.eq_ignore_ascii_case("text/plain")
    }
}

impl RawMessage {
    pub fn parse(raw: &[u8]) -> Result<RawMessage> {
        RawMessage::from_parsed(&parse_mail(raw)?)
    }

    fn from_parsed(parsed_mail: &ParsedMail) -> Result<RawMessage> {
        let mut parts = Vec::new();
        collect_parts(parsed_mail, &mut parts)?;

        // Header values come back with RFC 2047 encoded words already decoded.
        Ok(RawMessage {
            from: parsed_mail.headers.get_first_value("From"),
            to: parsed_mail.headers.get_first_value("To"),
            subject: parsed_mail.headers.get_first_value("Subject"),
            parts,
        })
    }

    pub fn is_forward(&self) -> bool {
        self.subject
            .as_deref()
            .is_some_and(|subject| subject.contains("Fwd:"))
    }

    /// First non-blank text/plain part.
    pub fn plain_text_body(&self) -> Option<&str> {
        self.parts
            .iter()
            .filter(|part| part.is_plain_text())
            .map(|part| part.text.as_str())
            .find(|text| !text.trim().is_empty())
    }

    /// The text the forwarded booking should be extracted from: the first plain part
    /// carrying a forward marker, otherwise the plain body as a whole.
    pub fn forwarded_body(&self) -> Option<&str> {
        self.parts
            .iter()
            .filter(|part| part.is_plain_text())
            .map(|part| part.text.as_str())
            .find(|text| contains_marker(text))
            .or_else(|| self.plain_text_body())
    }
}

fn collect_parts(part: &ParsedMail, parts: &mut Vec<ContentPart>) -> Result<()> {
    let content_type = part.ctype.mimetype.to_lowercase();

    if content_type == "message/rfc822" {
        match render_attached_message(part) {
            Ok(text) => {
                debug!("Forwarded email detected as an attachment");
                parts.push(ContentPart {
                    content_type: "text/plain".to_string(),
                    text,
                });
            }
            Err(e) => warn!("Failed to parse forwarded email attachment: {}", e),
        }
        return Ok(());
    }

    if part.subparts.is_empty() {
        if content_type.starts_with("text/") {
            match part.get_body() {
                Ok(text) => parts.push(ContentPart { content_type, text }),
                Err(e) => warn!("Skipping undecodable {} part: {}", content_type, e),
            }
        }
        return Ok(());
    }

    for subpart in &part.subparts {
        collect_parts(subpart, parts)?;
    }
    Ok(())
}

// Lays an attached message out the way a mail client would inline it, so the
// same extraction rules apply to both kinds of forward.
fn render_attached_message(part: &ParsedMail) -> Result<String> {
    let inner_raw = part.get_body_raw()?;
    let inner_mail = parse_mail(&inner_raw)?;
    let inner = RawMessage::from_parsed(&inner_mail)?;
    let date = inner_mail.headers.get_first_value("Date");

    let mut text = format!("{}\n", PRIMARY_MARKER);
    for (label, value) in [
        ("From", &inner.from),
        ("Date", &date),
        ("Subject", &inner.subject),
        ("To", &inner.to),
    ] {
        if let Some(value) = value {
            text.push_str(&format!("{}: {}\n", label, value));
        }
    }
    text.push('\n');
    text.push_str(inner.plain_text_body().unwrap_or_default());
    Ok(text)
}
