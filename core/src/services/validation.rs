//! Input checks shared by the services.

use chrono::NaiveDate;
use hr_shared::validation::non_blank;

use crate::errors::ValidationError;

/// A required string field; absent and blank are both missing
pub fn require<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, ValidationError> {
    non_blank(value).ok_or_else(|| ValidationError::required(field))
}

/// A required credential field; only absent and empty are missing
///
/// The value is returned untouched, surrounding whitespace included.
pub fn require_present<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, ValidationError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ValidationError::required(field))
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        field: field.to_string(),
    })
}

/// A required date field
pub fn require_date(value: Option<&str>, field: &str) -> Result<NaiveDate, ValidationError> {
    parse_date(require(value, field)?, field)
}

/// An optional date field; blank counts as absent
pub fn optional_date(value: Option<&str>, field: &str) -> Result<Option<NaiveDate>, ValidationError> {
    non_blank(value).map(|v| parse_date(v, field)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert_eq!(require(Some("x"), "email").unwrap(), "x");
        assert_eq!(require(Some("  "), "email"), Err(ValidationError::required("email")));
        assert_eq!(require(None, "email"), Err(ValidationError::required("email")));
    }

    #[test]
    fn test_require_present_keeps_whitespace() {
        assert_eq!(require_present(Some(" pw "), "password").unwrap(), " pw ");
        assert_eq!(require_present(Some("  "), "password").unwrap(), "  ");
        assert_eq!(
            require_present(Some(""), "password"),
            Err(ValidationError::required("password"))
        );
        assert_eq!(
            require_present(None, "password"),
            Err(ValidationError::required("password"))
        );
    }

    #[test]
    fn test_dates() {
        assert_eq!(
            require_date(Some("2024-02-29"), "date").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(matches!(
            require_date(Some("29/02/2024"), "date"),
            Err(ValidationError::InvalidDate { .. })
        ));
        assert_eq!(optional_date(Some(""), "to_date").unwrap(), None);
        assert!(optional_date(Some("2024-13-01"), "to_date").is_err());
    }
}
