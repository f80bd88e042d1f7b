//! Field checks shared by the delivery and catering forms.
//!
//! Each check returns the customer-facing message on failure.

use chrono::{NaiveDate, NaiveTime};

/// At least `min` characters once surrounding whitespace is trimmed.
pub fn min_chars(value: &str, min: usize, message: &str) -> Result<(), String> {
    if value.trim().chars().count() >= min {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Loose address check: one `@`, a non-empty local part and a dotted domain.
pub fn email(value: &str) -> Result<(), String> {
    let looks_valid = match value.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
                && !value.trim().contains(char::is_whitespace)
        }
        None => false,
    };
    if looks_valid {
        Ok(())
    } else {
        Err("Please enter a valid email".to_string())
    }
}

pub fn event_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| "Please select an event date".to_string())
}

pub fn event_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| "Please select an event time".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_chars_trims() {
        assert!(min_chars("Jo", 2, "short").is_ok());
        assert_eq!(min_chars("  J  ", 2, "short"), Err("short".to_string()));
        assert!(min_chars("Niño", 4, "short").is_ok());
    }

    #[test]
    fn test_email() {
        assert!(email("maria@example.ph").is_ok());
        assert!(email("maria@example").is_err());
        assert!(email("@example.com").is_err());
        assert!(email("maria@@example.com").is_err());
        assert!(email("maria santos@example.com").is_err());
    }

    #[test]
    fn test_event_date_and_time() {
        assert_eq!(
            event_date("2026-12-05").unwrap(),
            NaiveDate::from_ymd_opt(2026, 12, 5).unwrap()
        );
        assert!(event_date("12/05/2026").is_err());
        assert!(event_date("2026-02-30").is_err());
        assert_eq!(
            event_time("18:30").unwrap(),
            NaiveTime::from_hms_opt(18, 30, 0).unwrap()
        );
        assert!(event_time("6pm").is_err());
    }
}
