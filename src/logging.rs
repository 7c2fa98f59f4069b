use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::LevelFilter;

pub fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level.trim()).with_context(|| format!("Unknown log level: {}", level))
}

pub fn setup_logger(level: &str, log_file: Option<&Path>) -> Result<()> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(parse_level(level)?)
        // Dependency chatter stays quiet unless something goes wrong.
        .level_for("async_imap", LevelFilter::Warn)
        .level_for("hyper", LevelFilter::Warn)
        .chain(std::io::stdout());

    if let Some(path) = log_file {
        dispatch = dispatch.chain(
            fern::log_file(path).with_context(|| format!("Cannot open log file {}", path.display()))?,
        );
    }

    dispatch.apply()?;
    Ok(())
}
