use crate::verification::extractor::{Field, FieldRule, Shape};

pub const RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::BookingId,
        patterns: &[
            r"(?i)transaction\s+reference(?:\s+(?:number|no\.?|id))?\s*[:#-]?\s*([A-Za-z0-9]+)",
        ],
        shape: Shape::Trimmed,
        default: None,
    },
    // Address lines run from the "Venue" heading down to the directions link.
    FieldRule {
        field: Field::Venue,
        patterns: &[r"(?im)^[ \t]*Venue[ \t]*\r?\n((?s:.*?))^[ \t]*Get Directions"],
        shape: Shape::JoinedLines,
        default: None,
    },
    FieldRule {
        field: Field::DateTime,
        patterns: &[
            r"(?im)^[ \t]*Date[ \t]*\r?\n[ \t]*([^\r\n]+)",
            r"(?im)^[ \t]*Time[ \t]*\r?\n[ \t]*([^\r\n]+)",
        ],
        shape: Shape::Concatenated,
        default: None,
    },
    FieldRule {
        field: Field::EventName,
        patterns: &[r"(?im)^[ \t]*Music[ \t]*\r?\n[ \t]*([^\r\n]+)"],
        shape: Shape::Trimmed,
        default: None,
    },
    FieldRule {
        field: Field::Quantity,
        patterns: &[r"(?i)(\d+)\s+Tickets?\b"],
        shape: Shape::Trimmed,
        default: Some("1"),
    },
];
