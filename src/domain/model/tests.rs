// Unit tests for domain models

#[cfg(test)]
mod tests {
    use crate::domain::errors::*;
    use crate::domain::model::*;

    #[test]
    fn test_timestamp_parse_valid() {
        let time = Timestamp::parse("02:59").unwrap();
        assert_eq!(time.total_seconds(), 179);
        assert_eq!(time.as_str(), "02:59");
    }

    #[test]
    fn test_timestamp_parse_trims_input() {
        let time = Timestamp::parse("  01:05\n").unwrap();
        assert_eq!(time.as_str(), "01:05");
        assert_eq!(time.total_seconds(), 65);
    }

    #[test]
    fn test_timestamp_has_no_upper_bound() {
        assert_eq!(Timestamp::parse("99:59").unwrap().total_seconds(), 99 * 60 + 59);
        assert_eq!(Timestamp::parse("00:75").unwrap().total_seconds(), 75);
    }

    #[test]
    fn test_time_to_seconds() {
        assert_eq!(time_to_seconds("02:59"), Some(179));
        assert_eq!(time_to_seconds("00:00"), Some(0));
        assert_eq!(time_to_seconds("2:59"), None);
    }

    #[test]
    fn test_timestamp_rejects_illegal_characters() {
        for input in ["1m:30", "01.30", "-01:30", "ab", "", "01 30"] {
            assert_eq!(
                Timestamp::parse(input),
                Err(DomainError::InvalidTimeFormat(TimeFormatIssue::IllegalCharacters)),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_timestamp_rejects_bad_layout() {
        for input in ["1:30", "001:30", "01:3", "0130", "01:30:00", "::::", "12:"] {
            assert_eq!(
                Timestamp::parse(input),
                Err(DomainError::InvalidTimeFormat(TimeFormatIssue::NotMinutesSeconds)),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_timestamp_rejects_non_ascii_digits() {
        assert!(Timestamp::parse("٠١:٢٣").is_err());
    }

    #[test]
    fn test_cutter_offset() {
        assert_eq!(Timestamp::parse("00:05").unwrap().cutter_offset(), "00:00:05");
    }

    #[test]
    fn test_time_range_valid() {
        let range = TimeRange::new(
            Timestamp::parse("00:05").unwrap(),
            Timestamp::parse("00:10").unwrap(),
        )
        .unwrap();
        assert_eq!(range.duration_seconds(), 5);
    }

    #[test]
    fn test_time_range_rejects_equal_and_reversed() {
        let start = Timestamp::parse("01:00").unwrap();
        let same = Timestamp::parse("01:00").unwrap();
        assert!(matches!(
            TimeRange::new(start.clone(), same),
            Err(DomainError::InvalidTimeRange { .. })
        ));

        let earlier = Timestamp::parse("00:59").unwrap();
        let err = TimeRange::new(start, earlier).unwrap_err();
        assert!(err.is_abort());
    }

    #[test]
    fn test_sanitize_file_stem_replaces_char_for_char() {
        assert_eq!(sanitize_file_stem("My Video! #1"), "My_Video___1");
        assert_eq!(sanitize_file_stem("keep-this_one"), "keep-this_one");
        assert_eq!(sanitize_file_stem("  padded  "), "padded");
        assert_eq!(sanitize_file_stem("café"), "caf_");
    }

    #[test]
    fn test_clean_title_strips_punctuation() {
        assert_eq!(clean_title("My Video! #1\n"), "My Video 1");
        assert_eq!(clean_title("Rust - The Book (2024)"), "Rust - The Book 2024");
        assert_eq!(clean_title("!!!"), "");
    }

    #[test]
    fn test_video_stem() {
        assert_eq!(video_stem("a.mp4"), "a");
        assert_eq!(video_stem("a.mkv"), "a.mkv");
    }

    #[test]
    fn test_session_default_is_empty() {
        let session = Session::default();
        assert!(session.source.is_none());
        assert!(!session.temp_deleted);
    }
}
