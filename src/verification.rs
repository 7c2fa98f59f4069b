use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use serde::Serialize;

use crate::mail_reader::{InboxConnector, Mailbox};
use crate::settings::{Config, PlatformProfiles};

pub mod extractor;
pub mod locator;
pub mod unwrapper;
pub mod verifier;

use extractor::{ExtractedBooking, ExtractorRegistry};
use locator::{Located, NotFound};
use verifier::VerificationReport;

/// Everything a verification attempt can end in. Only `ConnectionFailed`
/// stems from an infrastructure problem; the rest are ordinary answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    ConnectionFailed { reason: String },
    NoForwardFound { reason: NotFound },
    Unsupported { platform: String },
    ParseFailed,
    Verified {
        passed: bool,
        discrepancies: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        booking: Option<ExtractedBooking>,
    },
}

impl Outcome {
    fn from_report(report: VerificationReport, booking: ExtractedBooking) -> Outcome {
        let passed = report.passed();
        Outcome::Verified {
            passed,
            discrepancies: report.discrepancies,
            booking: passed.then_some(booking),
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, Outcome::Verified { passed: true, .. })
    }

    pub fn message(&self) -> String {
        match self {
            Outcome::ConnectionFailed { reason } => format!("Failed to connect to email: {}", reason),
            Outcome::NoForwardFound { .. } => {
                "No forwarded email found. Please ensure you have forwarded the email correctly.".to_string()
            }
            Outcome::Unsupported { platform } => format!("Unsupported platform: {}", platform),
            Outcome::ParseFailed => "Failed to parse the forwarded email.".to_string(),
            Outcome::Verified { passed: true, .. } => {
                "Verification successful! All details are valid.".to_string()
            }
            Outcome::Verified { passed: false, .. } => "Verification failed:".to_string(),
        }
    }
}

/// Runs one verification per call: connect, locate, unwrap, extract, verify.
pub struct BookingVerifier<C> {
    connector: C,
    profiles: PlatformProfiles,
    registry: Arc<ExtractorRegistry>,
    propagation_delay: Duration,
}

impl<C: InboxConnector> BookingVerifier<C> {
    pub fn new(connector: C, config: &Config, registry: Arc<ExtractorRegistry>) -> Self {
        BookingVerifier {
            connector,
            profiles: config.platforms.clone(),
            registry,
            propagation_delay: Duration::from_secs(config.verification.propagation_delay_seconds),
        }
    }

    #[cfg(test)]
    pub fn with_propagation_delay(mut self, delay: Duration) -> Self {
        self.propagation_delay = delay;
        self
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Platforms that have both a sender profile and an extractor.
    pub fn supported_platforms(&self) -> Vec<&str> {
        self.registry
            .platforms()
            .into_iter()
            .filter(|platform| self.profiles.platform_email(platform).is_some())
            .collect()
    }

    /// `user_email` is both the address the forward must come from and the
    /// recipient the original booking mail must have been sent to.
    pub async fn verify(&self, user_email: &str, platform: &str) -> Outcome {
        let user_email = user_email.trim();
        let expected_sender = match (
            self.profiles.platform_email(platform),
            self.registry.get(platform),
        ) {
            (Some(sender), Some(_)) => sender,
            _ => {
                warn!("Unsupported platform requested: {}", platform);
                return Outcome::Unsupported {
                    platform: platform.to_string(),
                };
            }
        };

        let mut session = match self.connector.connect().await {
            Ok(session) => session,
            Err(e) => {
                error!("Failed to connect to email: {:#}", e);
                return Outcome::ConnectionFailed {
                    reason: format!("{:#}", e),
                };
            }
        };

        if !self.propagation_delay.is_zero() {
            tokio::time::sleep(self.propagation_delay).await;
        }

        let outcome = self
            .inspect(&mut session, user_email, platform, expected_sender)
            .await;

        if let Err(e) = session.logout().await {
            warn!("Logout failed: {:#}", e);
        }
        outcome
    }

    async fn inspect(
        &self,
        session: &mut C::Session,
        user_email: &str,
        platform: &str,
        expected_sender: &str,
    ) -> Outcome {
        let message = match locator::locate(session, user_email).await {
            Ok(Located::Found(message)) => message,
            Ok(Located::NotFound(reason)) => {
                warn!("No forwarded email found for user {}: {}", user_email, reason.describe());
                return Outcome::NoForwardFound { reason };
            }
            Ok(Located::Unreadable) => return Outcome::ParseFailed,
            Err(e) => {
                error!("Failed to read the inbox: {:#}", e);
                return Outcome::ConnectionFailed {
                    reason: format!("{:#}", e),
                };
            }
        };

        let Some(body) = message.forwarded_body() else {
            error!("Forwarded email content not found.");
            return Outcome::ParseFailed;
        };
        let text = unwrapper::forwarded_text(body);

        let Some(booking) = self.registry.extract(&text, platform) else {
            return Outcome::Unsupported {
                platform: platform.to_string(),
            };
        };

        let report = verifier::verify(&booking, expected_sender, user_email);
        if report.passed() {
            info!("Verification successful for {} on {}", user_email, platform);
        } else {
            info!(
                "Verification failed for {} on {}: {}",
                user_email,
                platform,
                report.discrepancies.join("; ")
            );
        }
        Outcome::from_report(report, booking)
    }
}
