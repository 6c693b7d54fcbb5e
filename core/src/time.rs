use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Result, TaskError};

pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` due date. Surrounding whitespace is ignored, nothing
/// else is: relative dates and time-of-day suffixes are rejected.
pub fn parse_due_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DUE_DATE_FORMAT).map_err(|source| {
        TaskError::DateParse {
            input: input.to_string(),
            source,
        }
    })
}

/// The instant a due date starts counting as overdue: midnight of that day.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub fn format_due_date(date: NaiveDate) -> String {
    date.format(DUE_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_due_date() {
        let d = parse_due_date("2025-01-31").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());

        let d = parse_due_date("  2024-02-29\n").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_due_date_rejects_invalid() {
        for input in ["2020-13-40", "2023-02-29", "tomorrow", "", "2020/01/01", "2020-01-01 10:00:00"] {
            let err = parse_due_date(input).unwrap_err();
            match err {
                TaskError::DateParse { input: ref got, .. } => assert_eq!(got, input),
                other => panic!("unexpected error for {:?}: {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_start_of_day() {
        let d = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(start_of_day(d).to_string(), "2020-01-01 00:00:00");
        assert_eq!(format_due_date(d), "2020-01-01");
    }
}
