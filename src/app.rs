use crate::cli::OutputFormat;
use crate::clock::ClockTime;
use crate::config::Config;
use crate::error::TimeError;
use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use serde::Serialize;
use std::io::Write;

/// What the shell should do with one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Exit,
    Spoken(String),
    /// Bad input; report and keep reading.
    Error(String),
    /// A defect in the conversion logic; report and keep reading.
    Unexpected(String),
}

impl LineOutcome {
    fn from_conversion(result: Result<String, TimeError>) -> Self {
        match result {
            Ok(spoken) => LineOutcome::Spoken(spoken),
            Err(e) if e.is_user_error() => LineOutcome::Error(e.to_string()),
            Err(e) => LineOutcome::Unexpected(e.to_string()),
        }
    }
}

/// Interactive read-convert-print loop.
pub struct Shell {
    config: Config,
}

impl Shell {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn handle_line(&self, line: &str) -> LineOutcome {
        log::debug!("User input received: {:?}", line);
        if line.eq_ignore_ascii_case("exit") {
            log::info!("Exit requested");
            return LineOutcome::Exit;
        }
        LineOutcome::from_conversion(crate::convert(line))
    }

    pub fn run(&self) -> Result<()> {
        log::info!("Starting British Time Converter");
        let mut rl = DefaultEditor::new()?;

        println!("=== British Time Converter ===");
        println!("Enter time in HH:MM format (e.g., 13:45). Type 'exit' to quit.");

        loop {
            match rl.readline(&self.config.prompt) {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    match self.handle_line(&line) {
                        LineOutcome::Exit => {
                            println!("Exiting application. Goodbye!");
                            break;
                        }
                        LineOutcome::Spoken(spoken) => println!("Spoken form: {}", spoken),
                        LineOutcome::Error(message) => {
                            log::warn!("Invalid time provided: {:?} - {}", line, message);
                            eprintln!("Error: {}", message);
                        }
                        LineOutcome::Unexpected(message) => {
                            log::error!("Unexpected error during conversion: {}", message);
                            eprintln!("An unexpected error occurred: {}", message);
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct ConversionRecord<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<ClockTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    spoken: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> ConversionRecord<'a> {
    fn new(input: &'a str) -> Self {
        let converted = input
            .parse::<ClockTime>()
            .and_then(|time| crate::spoken::to_spoken_form(&time).map(|spoken| (time, spoken)));
        match converted {
            Ok((time, spoken)) => {
                Self { input, time: Some(time), spoken: Some(spoken), error: None }
            }
            Err(e) => Self { input, time: None, spoken: None, error: Some(e.to_string()) },
        }
    }
}

/// Convert each input once, without the shell.
///
/// Results go to `out`; in text mode failures go to `err` like in the shell.
/// Returns `true` when every input converted.
pub fn run_one_shot<O: Write, E: Write>(
    inputs: &[String],
    format: OutputFormat,
    out: &mut O,
    err: &mut E,
) -> Result<bool> {
    let mut all_ok = true;
    for input in inputs {
        match format {
            OutputFormat::Text => match LineOutcome::from_conversion(crate::convert(input)) {
                LineOutcome::Spoken(spoken) => writeln!(out, "Spoken form: {}", spoken)?,
                LineOutcome::Error(message) => {
                    all_ok = false;
                    writeln!(err, "Error: {}", message)?;
                }
                LineOutcome::Unexpected(message) => {
                    all_ok = false;
                    writeln!(err, "An unexpected error occurred: {}", message)?;
                }
                LineOutcome::Exit => {}
            },
            OutputFormat::Json => {
                let record = ConversionRecord::new(input);
                all_ok &= record.error.is_none();
                let line = serde_json::to_string(&record)
                    .with_context(|| format!("Failed to serialize result for {:?}", input))?;
                writeln!(out, "{}", line)?;
            }
        }
    }
    Ok(all_ok)
}
