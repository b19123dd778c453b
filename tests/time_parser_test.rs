#[cfg(test)]
mod time_parser_tests {
    use spoken_time::{ClockTime, TimeError};

    #[test]
    fn test_time_parsing() {
        let test_cases = vec![
            ("00:00", Some((0, 0))),
            ("0:00", Some((0, 0))),
            ("8:05", Some((8, 5))),
            ("08:05", Some((8, 5))),
            ("19:59", Some((19, 59))),
            ("23:45", Some((23, 45))),
            ("24:00", None),
            ("12:60", None),
            ("1:5", None),
            ("", None),
            ("noon", None),
            ("13:45 ", None),
            ("8pm", None),
            ("8:30pm", None),
            ("10:00 PM", None),
        ];

        for (input, expected) in test_cases {
            let result = input.parse::<ClockTime>().ok().map(|t| (t.hour(), t.minute()));
            assert_eq!(result, expected, "Failed for input: {:?}", input);
        }
    }

    #[test]
    fn test_rejections_are_format_errors() {
        for input in ["24:00", "12:60", "1:5", "", "noon", "13:45 "] {
            match input.parse::<ClockTime>() {
                Err(TimeError::InvalidFormat { input: rejected, .. }) => {
                    assert_eq!(rejected, input)
                }
                other => panic!("Expected InvalidFormat for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_canonical_round_trip() {
        for hour in 0..=23 {
            for minute in 0..=59 {
                let time = ClockTime::new(hour, minute).unwrap();
                let text = time.to_string();
                assert_eq!(text, format!("{:02}:{:02}", hour, minute));
                assert_eq!(text.parse::<ClockTime>().unwrap(), time, "Failed for {}", text);
            }
        }
    }

    #[test]
    fn test_derived_queries() {
        let test_cases = vec![
            ("00:00", 12, true, false),
            ("00:30", 12, false, false),
            ("12:00", 12, false, true),
            ("12:30", 12, false, false),
            ("13:00", 1, false, false),
            ("23:59", 11, false, false),
        ];

        for (input, hour12, midnight, noon) in test_cases {
            let time: ClockTime = input.parse().unwrap();
            assert_eq!(time.hour12(), hour12, "hour12 for {}", input);
            assert_eq!(time.is_midnight(), midnight, "midnight for {}", input);
            assert_eq!(time.is_noon(), noon, "noon for {}", input);
        }
    }
}
