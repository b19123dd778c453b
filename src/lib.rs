pub mod app;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod spoken;

use log::{debug, info};

/// Convert a `HH:MM` string to its British spoken form.
///
/// # Errors
/// Returns [`TimeError::InvalidFormat`] when `text` is not a valid 24-hour
/// time, and [`TimeError::Internal`] if the phrasing rules fail.
pub fn convert(text: &str) -> Result<String, TimeError> {
    debug!("Converting time string to British spoken form: {:?}", text);
    let time: ClockTime = text.parse()?;
    let spoken = spoken::to_spoken_form(&time)?;
    info!("Converted {} to \"{}\"", time, spoken);
    Ok(spoken)
}

/// Install the process-wide logger. Records go to stderr so they never mix
/// with conversion output.
pub fn init_logger(default_filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();
}

// Re-export commonly used types
pub use clock::ClockTime;
pub use config::Config;
pub use error::TimeError;
pub use spoken::{Rule, to_spoken_form};
