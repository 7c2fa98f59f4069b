use std::collections::HashMap;

use itertools::Itertools;
use log::{debug, warn};
use regex::Regex;
use serde::Serialize;

use crate::settings::normalize_platform;

pub mod bookmyshow;
pub mod paytminsider;
pub mod zomato;

const ADDRESS_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Booking fields that must all be present for a verification to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    BookingId,
    Venue,
    DateTime,
    EventName,
    Quantity,
}

impl Field {
    pub const REQUIRED: [Field; 5] = [
        Field::BookingId,
        Field::Venue,
        Field::DateTime,
        Field::EventName,
        Field::Quantity,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Field::BookingId => "booking_id",
            Field::Venue => "venue",
            Field::DateTime => "date_time",
            Field::EventName => "event_name",
            Field::Quantity => "quantity",
        }
    }

    /// "date_time" becomes "Date Time".
    pub fn label(&self) -> String {
        self.key()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedBooking {
    pub from_email: Option<String>,
    pub to_email: Option<String>,
    pub booking_id: Option<String>,
    pub venue: Option<String>,
    pub date_time: Option<String>,
    pub event_name: Option<String>,
    pub quantity: Option<String>,
}

impl ExtractedBooking {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::BookingId => self.booking_id.as_deref(),
            Field::Venue => self.venue.as_deref(),
            Field::DateTime => self.date_time.as_deref(),
            Field::EventName => self.event_name.as_deref(),
            Field::Quantity => self.quantity.as_deref(),
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::BookingId => &mut self.booking_id,
            Field::Venue => &mut self.venue,
            Field::DateTime => &mut self.date_time,
            Field::EventName => &mut self.event_name,
            Field::Quantity => &mut self.quantity,
        }
    }
}

/// How the capture groups of a rule become a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Group 1 of the first pattern that matches, trimmed.
    Trimmed,
    /// Group 1 of the first matching pattern, its non-blank lines joined with commas.
    JoinedLines,
    /// Group 1 of every pattern joined with a space; absent unless all match.
    Concatenated,
    /// A constant; the template carries no such field.
    Fixed(&'static str),
}

/// One row of a platform's rule table.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub patterns: &'static [&'static str],
    pub shape: Shape,
    pub default: Option<&'static str>,
}

struct CompiledRule {
    field: Field,
    patterns: Vec<Regex>,
    shape: Shape,
    default: Option<&'static str>,
}

fn capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern.captures(text)?.get(1).map(|m| m.as_str())
}

impl CompiledRule {
    fn compile(rule: &FieldRule) -> Result<CompiledRule, regex::Error> {
        Ok(CompiledRule {
            field: rule.field,
            patterns: rule
                .patterns
                .iter()
                .map(|pattern| Regex::new(pattern))
                .collect::<Result<_, _>>()?,
            shape: rule.shape,
            default: rule.default,
        })
    }

    fn apply(&self, text: &str) -> Option<String> {
        let value = match self.shape {
            Shape::Fixed(value) => Some(value.to_string()),
            Shape::Trimmed => self
                .patterns
                .iter()
                .find_map(|pattern| capture(pattern, text))
                .map(|value| value.trim().to_string()),
            Shape::JoinedLines => self
                .patterns
                .iter()
                .find_map(|pattern| capture(pattern, text))
                .map(|block| {
                    block
                        .lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty())
                        .join(", ")
                        .trim_matches(|c: char| c == ',' || c == ' ')
                        .to_string()
                }),
            Shape::Concatenated => self
                .patterns
                .iter()
                .map(|pattern| capture(pattern, text).map(str::trim))
                .collect::<Option<Vec<_>>>()
                .map(|pieces| pieces.join(" ")),
        };

        value
            .filter(|value| !value.is_empty())
            .or_else(|| self.default.map(str::to_string))
    }
}

/// Pulls booking fields out of an unwrapped forward for one platform.
pub trait Extractor: Send + Sync {
    fn platform(&self) -> &str;

    fn extract(&self, text: &str) -> ExtractedBooking;
}

/// Extractor driven by a static rule table; the sender and recipient
/// addresses are found the same way for every platform.
pub struct RuleTableExtractor {
    platform: String,
    from_address: Regex,
    to_address: Regex,
    rules: Vec<CompiledRule>,
}

fn address_after(label: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?is){}.*?({})", regex::escape(label), ADDRESS_PATTERN))
}

impl RuleTableExtractor {
    pub fn new(platform: &str, table: &[FieldRule]) -> Result<Self, regex::Error> {
        Ok(RuleTableExtractor {
            platform: normalize_platform(platform),
            from_address: address_after("From:")?,
            to_address: address_after("To:")?,
            rules: table.iter().map(CompiledRule::compile).collect::<Result<_, _>>()?,
        })
    }

    fn address(&self, pattern: &Regex, label: &str, text: &str) -> Option<String> {
        let address = capture(pattern, text).map(|address| address.trim().to_lowercase());
        if address.is_none() {
            warn!("Email address not found for field: {}", label);
        }
        address
    }
}

impl Extractor for RuleTableExtractor {
    fn platform(&self) -> &str {
        &self.platform
    }

    fn extract(&self, text: &str) -> ExtractedBooking {
        let mut booking = ExtractedBooking {
            from_email: self.address(&self.from_address, "From:", text),
            to_email: self.address(&self.to_address, "To:", text),
            ..Default::default()
        };

        for rule in &self.rules {
            match rule.apply(text) {
                Some(value) => {
                    debug!("{} {} extracted: {}", self.platform, rule.field.label(), value);
                    *booking.slot(rule.field) = Some(value);
                }
                None => warn!("{} {} not found in the email.", self.platform, rule.field.label()),
            }
        }
        booking
    }
}

/// Platform identifier to extraction strategy.
#[derive(Default)]
pub struct ExtractorRegistry {
    extractors: HashMap<String, Box<dyn Extractor>>,
}

impl ExtractorRegistry {
    pub fn with_default_platforms() -> Result<Self, regex::Error> {
        let mut registry = ExtractorRegistry::default();
        registry.register(Box::new(RuleTableExtractor::new("bookmyshow", bookmyshow::RULES)?));
        registry.register(Box::new(RuleTableExtractor::new("zomato", zomato::RULES)?));
        registry.register(Box::new(RuleTableExtractor::new("paytminsider", paytminsider::RULES)?));
        Ok(registry)
    }

    /// Replaces any extractor already registered for the same platform.
    pub fn register(&mut self, extractor: Box<dyn Extractor>) {
        self.extractors
            .insert(normalize_platform(extractor.platform()), extractor);
    }

    pub fn get(&self, platform: &str) -> Option<&dyn Extractor> {
        self.extractors
            .get(&normalize_platform(platform))
            .map(|extractor| extractor.as_ref())
    }

    /// `None` means the platform is unsupported.
    pub fn extract(&self, text: &str, platform: &str) -> Option<ExtractedBooking> {
        self.get(platform).map(|extractor| extractor.extract(text))
    }

    pub fn platforms(&self) -> Vec<&str> {
        self.extractors.keys().map(String::as_str).sorted().collect()
    }
}
