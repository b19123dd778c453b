//! British spoken form of a clock time.
//!
//! Conversion walks [`RULES`] in order and renders the first rule that
//! matches. The order matters: `ThirtyTwo` sits in front of `MinutesTo` and
//! overrides it, so 06:32 reads "six thirty-two" rather than
//! "twenty-eight to seven".

use crate::clock::ClockTime;
use crate::error::TimeError;
use crate::lexicon::words_for;
use log::{debug, error};

/// A single phrasing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Midnight,
    Noon,
    OClock,
    QuarterPast,
    HalfPast,
    QuarterTo,
    MinutesPast,
    ThirtyTwo,
    MinutesTo,
}

/// Rules in evaluation order. First match wins.
pub const RULES: [Rule; 9] = [
    Rule::Midnight,
    Rule::Noon,
    Rule::OClock,
    Rule::QuarterPast,
    Rule::HalfPast,
    Rule::QuarterTo,
    Rule::MinutesPast,
    Rule::ThirtyTwo,
    Rule::MinutesTo,
];

impl Rule {
    /// Whether this rule applies to `time`, ignoring the rules ahead of it.
    pub fn matches(self, time: &ClockTime) -> bool {
        let minute = time.minute();
        match self {
            Rule::Midnight => time.is_midnight(),
            Rule::Noon => time.is_noon(),
            Rule::OClock => minute == 0,
            Rule::QuarterPast => minute == 15,
            Rule::HalfPast => minute == 30,
            Rule::QuarterTo => minute == 45,
            Rule::MinutesPast => minute < 30,
            Rule::ThirtyTwo => minute == 32,
            Rule::MinutesTo => minute > 30,
        }
    }

    /// Render `time` with this rule.
    pub fn render(self, time: &ClockTime) -> Result<String, TimeError> {
        let hour = i32::from(time.hour12());
        let minute = i32::from(time.minute());
        let phrase = match self {
            Rule::Midnight => "midnight".to_string(),
            Rule::Noon => "noon".to_string(),
            Rule::OClock => format!("{} o'clock", words_for(hour)?),
            Rule::QuarterPast => format!("quarter past {}", words_for(hour)?),
            Rule::HalfPast => format!("half past {}", words_for(hour)?),
            Rule::QuarterTo => format!("quarter to {}", words_for(next_hour(time))?),
            Rule::MinutesPast => format!("{} past {}", words_for(minute)?, words_for(hour)?),
            Rule::ThirtyTwo => format!("{} thirty-two", words_for(hour)?),
            Rule::MinutesTo => {
                format!("{} to {}", words_for(60 - minute)?, words_for(next_hour(time))?)
            }
        };
        Ok(phrase)
    }

    /// The first rule in [`RULES`] that matches `time`.
    pub fn select(time: &ClockTime) -> Option<Rule> {
        RULES.iter().copied().find(|rule| rule.matches(time))
    }
}

/// The hour a "to" phrase counts towards, on the 12-hour dial.
fn next_hour(time: &ClockTime) -> i32 {
    match time.hour12() {
        12 => 1,
        h => i32::from(h) + 1,
    }
}

/// Convert a validated time to its British spoken form.
pub fn to_spoken_form(time: &ClockTime) -> Result<String, TimeError> {
    let Some(rule) = Rule::select(time) else {
        error!("No phrasing rule matched {}", time);
        return Err(TimeError::Internal(format!("no phrasing rule matched {}", time)));
    };
    debug!("Rule {:?} selected for {}", rule, time);

    rule.render(time).map_err(|e| {
        // Every number handed to the lexicon here is derived from a valid time.
        error!("Rule {:?} failed to render {}: {}", rule, time, e);
        TimeError::Internal(format!("rule {:?} failed for {}: {}", rule, time, e))
    })
}
