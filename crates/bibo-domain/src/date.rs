//! Partial publication dates
//!
//! BibTeX carries dates as separate `year`, `month` and `day` fields, any
//! suffix of which may be missing. A [`PublicationDate`] keeps exactly the
//! known prefix and enforces calendar validity for it.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::error::DateError;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// A date where only a prefix of (year, month, day) is known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PublicationDate {
    year: i32,
    month: Option<u8>,
    day: Option<u8>,
}

impl PublicationDate {
    /// Build a date from numeric components
    pub fn new(year: i32, month: Option<u8>, day: Option<u8>) -> Result<Self, DateError> {
        if !(1..=9999).contains(&year) {
            return Err(DateError::InvalidYear {
                value: year.to_string(),
            });
        }

        match (month, day) {
            (None, Some(_)) => Err(DateError::MissingComponent {
                field: "day",
                requires: "month",
            }),
            (Some(m), _) if !(1..=12).contains(&m) => Err(DateError::InvalidMonth {
                value: m.to_string(),
            }),
            (Some(m), Some(d)) if d == 0 || Some(d) > days_in_month(year, m) => {
                Err(DateError::InvalidDay {
                    value: d.to_string(),
                    year,
                    month: m,
                })
            }
            _ => Ok(Self { year, month, day }),
        }
    }

    /// Year only
    pub fn year_only(year: i32) -> Result<Self, DateError> {
        Self::new(year, None, None)
    }

    /// Parse BibTeX-style date fields.
    ///
    /// `month` accepts `1`..`12` or a case-insensitive three-letter
    /// abbreviation (`jan`..`dec`). Blank fields count as absent.
    pub fn parse(year: &str, month: Option<&str>, day: Option<&str>) -> Result<Self, DateError> {
        let month = present(month);
        let day = present(day);

        let year = parse_year(year)?;
        let month = match month {
            Some(raw) => Some(parse_month(raw).ok_or_else(|| DateError::InvalidMonth {
                value: raw.to_string(),
            })?),
            None => None,
        };
        let day = match (day, month) {
            (Some(_), None) => {
                return Err(DateError::MissingComponent {
                    field: "day",
                    requires: "month",
                })
            }
            (Some(raw), Some(m)) => Some(parse_day(raw, year, m)?),
            (None, _) => None,
        };

        Self::new(year, month, day)
    }

    /// Parse optional date fields; no fields at all yields `Ok(None)`.
    ///
    /// A month without a year (or a day without a month) is an error rather
    /// than being silently dropped.
    pub fn parse_fields(
        year: Option<&str>,
        month: Option<&str>,
        day: Option<&str>,
    ) -> Result<Option<Self>, DateError> {
        match (present(year), present(month), present(day)) {
            (None, None, None) => Ok(None),
            (None, Some(_), _) => Err(DateError::MissingComponent {
                field: "month",
                requires: "year",
            }),
            (None, None, Some(_)) => Err(DateError::MissingComponent {
                field: "day",
                requires: "year",
            }),
            (Some(y), m, d) => Self::parse(y, m, d).map(Some),
        }
    }

    /// Parse the ISO-8601 prefix form produced by `Display`
    /// (`2023`, `2023-02` or `2023-02-10`).
    pub fn from_iso(s: &str) -> Result<Self, DateError> {
        let mut parts = s.trim().splitn(3, '-');
        let year = parse_year(parts.next().unwrap_or_default())?;
        let month = match parts.next() {
            Some(raw) => Some(parse_numeric_month(raw).ok_or_else(|| {
                DateError::InvalidMonth {
                    value: raw.to_string(),
                }
            })?),
            None => None,
        };
        let day = match (parts.next(), month) {
            (Some(raw), Some(m)) => Some(parse_day(raw, year, m)?),
            _ => None,
        };
        Self::new(year, month, day)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Option<u8> {
        self.month
    }

    pub fn day(&self) -> Option<u8> {
        self.day
    }

    /// Lower-case three-letter month token, as written in BibTeX
    pub fn month_abbreviation(&self) -> Option<&'static str> {
        self.month
            .and_then(|m| MONTH_ABBREVIATIONS.get(usize::from(m).checked_sub(1)?))
            .copied()
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Full calendar date, only when year, month and day are all known
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        match (self.month, self.day) {
            (Some(m), Some(d)) => NaiveDate::from_ymd_opt(self.year, m.into(), d.into()),
            _ => None,
        }
    }
}

impl fmt::Display for PublicationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year)?;
        if let Some(m) = self.month {
            write!(f, "-{:02}", m)?;
        }
        if let Some(d) = self.day {
            write!(f, "-{:02}", d)?;
        }
        Ok(())
    }
}

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, `None` for a month outside 1..=12
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Parse a month given as a number or a three-letter abbreviation
pub fn parse_month(raw: &str) -> Option<u8> {
    let trimmed = raw.trim();
    if let Some(m) = parse_numeric_month(trimmed) {
        return Some(m);
    }
    let lower = trimmed.to_lowercase();
    MONTH_ABBREVIATIONS
        .iter()
        .position(|abbr| *abbr == lower)
        .and_then(|i| u8::try_from(i + 1).ok())
}

fn parse_numeric_month(raw: &str) -> Option<u8> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.len() > 2 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok().filter(|m| (1..=12).contains(m))
}

fn parse_year(raw: &str) -> Result<i32, DateError> {
    let trimmed = raw.trim();
    let invalid = || DateError::InvalidYear {
        value: raw.to_string(),
    };
    if trimmed.len() != 4 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    match trimmed.parse::<i32>() {
        Ok(year) if year >= 1 => Ok(year),
        _ => Err(invalid()),
    }
}

fn parse_day(raw: &str, year: i32, month: u8) -> Result<u8, DateError> {
    let trimmed = raw.trim();
    let invalid = || DateError::InvalidDay {
        value: raw.to_string(),
        year,
        month,
    };
    if trimmed.is_empty() || trimmed.len() > 2 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let day: u8 = trimmed.parse().map_err(|_| invalid())?;
    match days_in_month(year, month) {
        Some(max) if (1..=max).contains(&day) => Ok(day),
        _ => Err(invalid()),
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2023, 2, 28, true)]
    #[case(2023, 2, 29, false)]
    #[case(2024, 2, 29, true)]
    #[case(1900, 2, 29, false)]
    #[case(2000, 2, 29, true)]
    #[case(2023, 4, 31, false)]
    #[case(2023, 12, 31, true)]
    #[case(2023, 1, 0, false)]
    fn test_day_bounds(#[case] year: i32, #[case] month: u8, #[case] day: u8, #[case] ok: bool) {
        assert_eq!(PublicationDate::new(year, Some(month), Some(day)).is_ok(), ok);
        let parsed = PublicationDate::parse(
            &year.to_string(),
            Some(&month.to_string()),
            Some(&day.to_string()),
        );
        assert_eq!(parsed.is_ok(), ok);
    }

    #[rstest]
    #[case("feb", 2)]
    #[case("Feb", 2)]
    #[case("DEC", 12)]
    #[case("2", 2)]
    #[case("02", 2)]
    #[case(" 11 ", 11)]
    fn test_month_tokens(#[case] raw: &str, #[case] expected: u8) {
        assert_eq!(parse_month(raw), Some(expected));
    }

    #[rstest]
    #[case("february")]
    #[case("13")]
    #[case("0")]
    #[case("fe")]
    #[case("003")]
    fn test_bad_month_tokens(#[case] raw: &str) {
        assert_eq!(parse_month(raw), None);
        let err = PublicationDate::parse("2023", Some(raw), None).unwrap_err();
        assert!(matches!(err, DateError::InvalidMonth { .. }));
    }

    #[rstest]
    #[case("0000")]
    #[case("23")]
    #[case("20x3")]
    #[case("-2023")]
    #[case("12023")]
    #[case("")]
    fn test_bad_years(#[case] raw: &str) {
        let err = PublicationDate::parse(raw, None, None).unwrap_err();
        assert!(matches!(err, DateError::InvalidYear { .. }));
    }

    #[test]
    fn test_partial_dates() {
        let date = PublicationDate::parse("2023", None, None).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2023, None, None));

        let date = PublicationDate::parse("2023", Some("feb"), None).unwrap();
        assert_eq!(date.month(), Some(2));
        assert_eq!(date.day(), None);
        assert_eq!(date.to_naive_date(), None);
    }

    #[test]
    fn test_day_without_month_fails() {
        let err = PublicationDate::parse("2023", None, Some("10")).unwrap_err();
        assert_eq!(
            err,
            DateError::MissingComponent {
                field: "day",
                requires: "month"
            }
        );
        assert!(PublicationDate::new(2023, None, Some(10)).is_err());
    }

    #[test]
    fn test_parse_fields_ordering() {
        assert_eq!(PublicationDate::parse_fields(None, None, None), Ok(None));
        assert_eq!(PublicationDate::parse_fields(Some(" "), Some(""), None), Ok(None));
        assert!(matches!(
            PublicationDate::parse_fields(None, Some("feb"), None),
            Err(DateError::MissingComponent { field: "month", .. })
        ));
        assert!(matches!(
            PublicationDate::parse_fields(None, None, Some("3")),
            Err(DateError::MissingComponent { field: "day", .. })
        ));
    }

    #[test]
    fn test_to_naive_date() {
        let date = PublicationDate::parse("2023", Some("feb"), Some("10")).unwrap();
        assert_eq!(date.to_naive_date(), NaiveDate::from_ymd_opt(2023, 2, 10));
    }

    #[test]
    fn test_display_and_from_iso() {
        for (date, text) in [
            (PublicationDate::new(2023, None, None).unwrap(), "2023"),
            (PublicationDate::new(2023, Some(2), None).unwrap(), "2023-02"),
            (PublicationDate::new(987, Some(11), Some(3)).unwrap(), "0987-11-03"),
        ] {
            assert_eq!(date.to_string(), text);
            assert_eq!(PublicationDate::from_iso(text), Ok(date));
        }
        assert!(PublicationDate::from_iso("2023-feb").is_err());
        assert!(PublicationDate::from_iso("2023-02-30").is_err());
    }

    #[test]
    fn test_month_abbreviation() {
        let date = PublicationDate::new(2023, Some(2), Some(10)).unwrap();
        assert_eq!(date.month_abbreviation(), Some("feb"));
        assert_eq!(PublicationDate::year_only(2023).unwrap().month_abbreviation(), None);
    }

    #[test]
    fn test_leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2024, 13), None);
    }
}
