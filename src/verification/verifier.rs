use serde::Serialize;

use crate::verification::extractor::{ExtractedBooking, Field};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub discrepancies: Vec<String>,
}

impl VerificationReport {
    pub fn passed(&self) -> bool {
        self.discrepancies.is_empty()
    }
}

fn matches_ignoring_case(found: Option<&str>, expected: &str) -> bool {
    found.is_some_and(|found| found.to_lowercase() == expected.to_lowercase())
}

/// Checks sender, recipient and field completeness. Any discrepancy fails the
/// whole verification.
pub fn verify(
    extracted: &ExtractedBooking,
    expected_sender: &str,
    expected_recipient: &str,
) -> VerificationReport {
    let mut discrepancies = Vec::new();

    if !matches_ignoring_case(extracted.from_email.as_deref(), expected_sender) {
        discrepancies.push(format!(
            "From email does not match. Expected: {}, Found: {}",
            expected_sender,
            extracted.from_email.as_deref().unwrap_or("None")
        ));
    }

    if !matches_ignoring_case(extracted.to_email.as_deref(), expected_recipient) {
        discrepancies.push(format!(
            "To email does not match. Expected: {}, Found: {}",
            expected_recipient,
            extracted.to_email.as_deref().unwrap_or("None")
        ));
    }

    for field in Field::REQUIRED {
        if extracted.get(field).is_none() {
            discrepancies.push(format!("{} not found in the email.", field.label()));
        }
    }

    VerificationReport { discrepancies }
}
