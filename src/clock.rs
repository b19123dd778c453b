//! Validated 24-hour clock times.
//!
//! A [`ClockTime`] can only hold an hour in 0..=23 and a minute in 0..=59.
//! It is built either from a `HH:MM` string or from integers, and never
//! changes once built.

use crate::error::TimeError;
use chrono::{Local, NaiveTime, Timelike};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Optional leading zero, hour 0-23, colon, two-digit minute 00-59. Nothing else.
static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[01]?[0-9]|2[0-3]):[0-5][0-9]$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Build a time from an hour (0-23) and minute (0-59).
    pub fn new(hour: i32, minute: i32) -> Result<Self, TimeError> {
        if !(0..=23).contains(&hour) {
            debug!("Rejected hour {} (must be 0-23)", hour);
            return Err(TimeError::out_of_range("hour", hour, 0, 23));
        }
        if !(0..=59).contains(&minute) {
            debug!("Rejected minute {} (must be 0-59)", minute);
            return Err(TimeError::out_of_range("minute", minute, 0, 59));
        }
        Ok(Self { hour: hour as u8, minute: minute as u8 })
    }

    /// Current local wall-clock time, seconds dropped.
    pub fn now() -> Self {
        Self::from(Local::now().time())
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Hour on a 12-hour dial: 0 becomes 12, afternoon hours drop by 12.
    pub fn hour12(&self) -> u8 {
        match self.hour {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        }
    }

    pub fn is_midnight(&self) -> bool {
        self.hour == 0 && self.minute == 0
    }

    pub fn is_noon(&self) -> bool {
        self.hour == 12 && self.minute == 0
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !TIME_PATTERN.is_match(s) {
            debug!("Invalid time string format: {:?}", s);
            return Err(TimeError::invalid_format(s));
        }

        // The pattern guarantees exactly one colon and ASCII digits on both sides.
        let (hour, minute) = s.split_once(':').ok_or_else(|| TimeError::invalid_format(s))?;
        let hour: i32 = hour.parse().map_err(|_| TimeError::invalid_format(s))?;
        let minute: i32 = minute.parse().map_err(|_| TimeError::invalid_format(s))?;

        debug!("Parsed time string {:?} -> {}:{}", s, hour, minute);
        Self::new(hour, minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        // chrono keeps hour < 24 and minute < 60
        Self { hour: time.hour() as u8, minute: time.minute() as u8 }
    }
}

impl From<ClockTime> for NaiveTime {
    fn from(time: ClockTime) -> Self {
        NaiveTime::from_hms_opt(time.hour.into(), time.minute.into(), 0).unwrap_or_default()
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
