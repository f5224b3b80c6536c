//! Tracing bootstrap for the `bookstore` binary.

use tracing::Level;

use crate::settings::{LogFormat, LogSettings};

/// Install the global fmt subscriber, writing to stderr so stdout stays
/// clean for command output. Repeated calls keep the first subscriber.
pub fn init(settings: &LogSettings) {
    let level = parse_level(&settings.level);
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    let installed = match settings.format {
        LogFormat::Pretty => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().with_current_span(true).try_init().is_ok(),
    };
    if installed && level_is_unknown(&settings.level) {
        tracing::warn!(level = %settings.level, "unknown log level, using info");
    }
}

fn parse_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::INFO)
}

fn level_is_unknown(level: &str) -> bool {
    level.trim().parse::<Level>().is_err()
}
