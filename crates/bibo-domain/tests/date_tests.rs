//! Day-in-month bound over the whole year range

use bibo_domain::{days_in_month, DateError, PublicationDate};
use proptest::prelude::*;

proptest! {
    #[test]
    fn last_day_of_month_is_accepted(year in 1i32..=9999, month in 1u8..=12) {
        let last = days_in_month(year, month).unwrap();
        let date = PublicationDate::new(year, Some(month), Some(last)).unwrap();
        prop_assert!(date.to_naive_date().is_some());

        let parsed = PublicationDate::parse(
            &format!("{:04}", year),
            Some(&month.to_string()),
            Some(&last.to_string()),
        )
        .unwrap();
        prop_assert_eq!(parsed, date);
    }

    #[test]
    fn day_past_month_end_is_rejected(year in 1i32..=9999, month in 1u8..=12) {
        let past = days_in_month(year, month).unwrap() + 1;

        let err = PublicationDate::new(year, Some(month), Some(past)).unwrap_err();
        let is_invalid_day = matches!(err, DateError::InvalidDay { .. });
        prop_assert!(is_invalid_day);

        let err = PublicationDate::parse(
            &format!("{:04}", year),
            Some(&month.to_string()),
            Some(&past.to_string()),
        )
        .unwrap_err();
        let is_invalid_day = matches!(err, DateError::InvalidDay { .. });
        prop_assert!(is_invalid_day);
    }

    #[test]
    fn february_length_follows_leap_rule(year in 1i32..=9999) {
        let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
        prop_assert_eq!(days_in_month(year, 2), Some(if leap { 29 } else { 28 }));
        prop_assert_eq!(PublicationDate::new(year, Some(2), Some(29)).is_ok(), leap);
    }
}
