//! Date and time helpers for display formatting and form input bridging.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Start of the current day as a UTC instant; stamps freshly created
/// editorial entities.
pub fn start_of_today() -> DateTime<Utc> {
    Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Display format for instants: `15.03.2024 14:02:26`.
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M:%S").to_string()
}

/// Display format for date-only values: `15.03.2024`.
pub fn format_date(value: &NaiveDate) -> String {
    value.format("%d.%m.%Y").to_string()
}

/// Value for an `<input type="date">`.
pub fn to_date_input(value: &NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Value for an `<input type="datetime-local">` (minute precision).
pub fn to_datetime_input(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%dT%H:%M").to_string()
}

pub fn parse_datetime_input(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let value = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&value), "15.03.2024 14:02:26");
    }

    #[test]
    fn test_format_date() {
        let value = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(&value), "15.03.2024");
    }

    #[test]
    fn test_date_input_round_trip() {
        let value = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(parse_date_input(&to_date_input(&value)), Some(value));
    }

    #[test]
    fn test_datetime_input_round_trip_at_minute_precision() {
        let value = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 0).unwrap();
        assert_eq!(parse_datetime_input(&to_datetime_input(&value)), Some(value));
    }

    #[test]
    fn test_invalid_input_parses_to_none() {
        assert_eq!(parse_date_input("invalid"), None);
        assert_eq!(parse_datetime_input("invalid"), None);
    }
}
