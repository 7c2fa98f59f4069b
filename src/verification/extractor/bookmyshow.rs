use crate::verification::extractor::{Field, FieldRule, Shape};

pub const RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::BookingId,
        patterns: &[r"(?i)BOOKING ID[:\s]+(\w+)"],
        shape: Shape::Trimmed,
        default: None,
    },
    // The directions link sits between the anchor and the venue line.
    FieldRule {
        field: Field::Venue,
        patterns: &[r"(?is)Venue\s+Directions.*?<.*?>.*?\n\s*([^\n<]+)"],
        shape: Shape::Trimmed,
        default: None,
    },
    FieldRule {
        field: Field::DateTime,
        patterns: &[r"(?i)Date\s*&\s*Time\s*\n\s*([^|]+\|[^<\n]+)"],
        shape: Shape::Trimmed,
        default: None,
    },
    FieldRule {
        field: Field::EventName,
        patterns: &[r"(?is)Subject:.*?Booking confirmed for\s+(.*?)(?:\n|$)"],
        shape: Shape::Trimmed,
        default: None,
    },
    FieldRule {
        field: Field::Quantity,
        patterns: &[r"(?is)Category\s+Quantity\s+Price.*?\n.*?\n(\d+)"],
        shape: Shape::Trimmed,
        default: None,
    },
];
