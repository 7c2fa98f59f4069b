use log::{error, info};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MessageSummary {
    pub seq: u32,
    pub from: Option<String>,
    pub subject: Option<String>,
}

pub fn display_summaries(summaries: &[MessageSummary]) {
    if summaries.is_empty() {
        info!("The inbox is empty");
    }
    summaries
        .iter()
        .for_each(|summary| display_json(summary));
}

pub fn display_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Error converting to JSON: {}", e),
    }
}
