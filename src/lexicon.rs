//! English words for the numbers 0 through 59.

use crate::error::TimeError;
use log::trace;

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 6] = ["", "", "twenty", "thirty", "forty", "fifty"];

/// Convert a number in 0..=59 to its English word form.
///
/// Compound numbers are hyphenated (`32` -> `"thirty-two"`); round tens have
/// no trailing part (`30` -> `"thirty"`).
pub fn words_for(n: i32) -> Result<String, TimeError> {
    if !(0..=59).contains(&n) {
        return Err(TimeError::out_of_range("number", n, 0, 59));
    }

    let n = n as usize;
    let words = if n < 20 {
        ONES[n].to_string()
    } else {
        match n % 10 {
            0 => TENS[n / 10].to_string(),
            ones => format!("{}-{}", TENS[n / 10], ONES[ones]),
        }
    };

    trace!("Number {} converted to \"{}\"", n, words);
    Ok(words)
}
