use chrono::NaiveDate;

use crate::error::{AppError, AppResult};

/// Parses a `YYYY-MM-DD` date string, rejecting anything malformed.
pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(format!("expected YYYY-MM-DD, got '{value}'")))
}

/// Formats a date the way the report screens display it (dd/mm/yyyy).
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-07").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
        );
        assert_eq!(
            parse_date(" 2024-12-31 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
        assert!(parse_date("07/01/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_format_display_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(format_display_date(date), "07/01/2024");
    }
}
