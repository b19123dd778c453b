use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// spoken-time - say a 24-hour clock time the British way
#[derive(Debug, Parser)]
#[command(name = "spoken-time")]
#[command(about = "Convert 24-hour clock times (HH:MM) to British spoken English", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Times to convert (if none are given, enters interactive mode)
    #[arg(value_name = "TIME")]
    pub times: Vec<String>,

    /// Convert the current local time
    #[arg(long)]
    pub now: bool,

    /// Output format for one-shot conversions
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Prompt shown in interactive mode
    #[arg(long)]
    pub prompt: Option<String>,

    /// Log filter (off, error, warn, info, debug, trace)
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// True when the invocation asks for conversions instead of the shell.
    pub fn is_one_shot(&self) -> bool {
        self.now || !self.times.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_enters_shell() {
        let cli = Cli::try_parse_from(["spoken-time"]).unwrap();
        assert!(!cli.is_one_shot());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.prompt.is_none());
    }

    #[test]
    fn test_times_and_flags() {
        let cli = Cli::try_parse_from([
            "spoken-time",
            "13:45",
            "06:32",
            "--format",
            "json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert!(cli.is_one_shot());
        assert_eq!(cli.times, vec!["13:45".to_string(), "06:32".to_string()]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_now_is_one_shot() {
        let cli = Cli::try_parse_from(["spoken-time", "--now"]).unwrap();
        assert!(cli.is_one_shot());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["spoken-time", "--format", "yaml"]).is_err());
    }
}
