use crate::verification::extractor::{Field, FieldRule, Shape};

pub const RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::BookingId,
        patterns: &[r"(?i)Ticket\s+ID[:\s#]+([\w-]+)"],
        shape: Shape::Trimmed,
        default: None,
    },
    // Zomato confirmations do not name the venue.
    FieldRule {
        field: Field::Venue,
        patterns: &[],
        shape: Shape::Fixed("not available"),
        default: None,
    },
    FieldRule {
        field: Field::DateTime,
        patterns: &[
            r"(?i)\b((?:Mon|Tue|Wed|Thu|Fri|Sat|Sun)[a-z]*,\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s+\d{1,2},\s+\d{4})",
        ],
        shape: Shape::Trimmed,
        default: None,
    },
    FieldRule {
        field: Field::EventName,
        patterns: &[r"(?i)You just scored tickets to\s+([^\r\n]+)"],
        shape: Shape::Trimmed,
        default: None,
    },
    FieldRule {
        field: Field::Quantity,
        patterns: &[r"(?i)RSVP\s*x\s*(\d+)"],
        shape: Shape::Trimmed,
        default: None,
    },
];
