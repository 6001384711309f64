use chrono::{DateTime, Local, NaiveDate};
use validator::Validate;

use crate::models::search::{SearchCriteria, ValidationOutcome};

pub const CITY_REQUIRED: &str = "City is required";
pub const CHECK_IN_REQUIRED: &str = "Check-in date is required";
pub const CHECK_IN_PAST: &str = "Check-in date must be in the future";
pub const CHECK_OUT_REQUIRED: &str = "Check-out date is required";
pub const CHECK_OUT_PAST: &str = "Check-out date must be in the future";
pub const CHECK_OUT_BEFORE_CHECK_IN: &str = "Check-out date must be after check-in date";
pub const GUESTS_OUT_OF_RANGE: &str = "Number of guests must be between 1 and 5";

/// Parses `YYYY-MM-DD`, falling back to the date part of an RFC 3339 timestamp.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

// Today counts as the future. Unparseable input does not.
fn is_on_or_after(value: &str, today: NaiveDate) -> bool {
    parse_calendar_date(value).is_some_and(|date| date >= today)
}

fn is_strictly_after(check_in: &str, check_out: &str) -> bool {
    match (parse_calendar_date(check_in), parse_calendar_date(check_out)) {
        (Some(check_in), Some(check_out)) => check_out > check_in,
        _ => false,
    }
}

/// Validates a search form submission against `today`.
///
/// Every rule runs; the error list keeps the order city, check-in,
/// check-out, date ordering, guests.
pub fn validate(criteria: &SearchCriteria, today: NaiveDate) -> ValidationOutcome {
    let mut errors = Vec::new();

    if criteria.city.trim().is_empty() {
        errors.push(CITY_REQUIRED.to_string());
    }

    if criteria.check_in.is_empty() {
        errors.push(CHECK_IN_REQUIRED.to_string());
    } else if !is_on_or_after(&criteria.check_in, today) {
        errors.push(CHECK_IN_PAST.to_string());
    }

    if criteria.check_out.is_empty() {
        errors.push(CHECK_OUT_REQUIRED.to_string());
    } else if !is_on_or_after(&criteria.check_out, today) {
        errors.push(CHECK_OUT_PAST.to_string());
    }

    if !criteria.check_in.is_empty()
        && !criteria.check_out.is_empty()
        && !is_strictly_after(&criteria.check_in, &criteria.check_out)
    {
        errors.push(CHECK_OUT_BEFORE_CHECK_IN.to_string());
    }

    if let Err(e) = criteria.validate() {
        if e.field_errors().contains_key("guests") {
            errors.push(GUESTS_OUT_OF_RANGE.to_string());
        }
    }

    ValidationOutcome {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// [`validate`] against the local calendar date.
pub fn validate_search_form(criteria: &SearchCriteria) -> ValidationOutcome {
    validate(criteria, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 15).unwrap()
    }

    fn day(offset: i64) -> String {
        (today() + Duration::days(offset))
            .format("%Y-%m-%d")
            .to_string()
    }

    fn criteria(city: &str, check_in: &str, check_out: &str, guests: i64) -> SearchCriteria {
        SearchCriteria {
            city: city.to_string(),
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            guests,
        }
    }

    #[test]
    fn empty_form_reports_every_missing_field_in_order() {
        let outcome = validate(&criteria("", "", "", 0), today());

        assert!(!outcome.is_valid);
        assert_eq!(
            outcome.errors,
            vec![
                CITY_REQUIRED,
                CHECK_IN_REQUIRED,
                CHECK_OUT_REQUIRED,
                GUESTS_OUT_OF_RANGE
            ]
        );
    }

    #[test]
    fn today_and_tomorrow_is_valid() {
        let outcome = validate(&criteria("Mumbai", &day(0), &day(1), 2), today());

        assert!(outcome.is_valid);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn check_out_before_check_in_only_reports_ordering() {
        let outcome = validate(&criteria("Goa", &day(1), &day(0), 3), today());

        assert_eq!(outcome.errors, vec![CHECK_OUT_BEFORE_CHECK_IN]);
        assert!(!outcome.is_valid);
    }

    #[test]
    fn same_day_check_out_is_rejected_by_ordering_only() {
        let outcome = validate(&criteria("Goa", &day(2), &day(2), 1), today());

        assert_eq!(outcome.errors, vec![CHECK_OUT_BEFORE_CHECK_IN]);
    }

    #[test]
    fn blank_city_is_required() {
        let outcome = validate(&criteria("   ", &day(1), &day(3), 1), today());

        assert_eq!(outcome.errors, vec![CITY_REQUIRED]);
    }

    #[test]
    fn past_dates_are_rejected() {
        let outcome = validate(&criteria("Delhi", &day(-2), &day(-1), 2), today());

        assert_eq!(outcome.errors, vec![CHECK_IN_PAST, CHECK_OUT_PAST]);
    }

    #[test]
    fn unparseable_dates_count_as_past() {
        let outcome = validate(&criteria("Delhi", "next week", &day(3), 2), today());

        assert_eq!(
            outcome.errors,
            vec![CHECK_IN_PAST, CHECK_OUT_BEFORE_CHECK_IN]
        );
    }

    #[test]
    fn guest_bounds_are_inclusive() {
        for guests in 1..=5 {
            let outcome = validate(&criteria("Jaipur", &day(1), &day(2), guests), today());
            assert!(outcome.is_valid, "{guests} guests should be accepted");
        }
        for guests in [-1, 0, 6] {
            let outcome = validate(&criteria("Jaipur", &day(1), &day(2), guests), today());
            assert_eq!(outcome.errors, vec![GUESTS_OUT_OF_RANGE]);
        }
    }

    #[test]
    fn missing_check_out_skips_ordering() {
        let outcome = validate(&criteria("Pune", &day(1), "", 2), today());

        assert_eq!(outcome.errors, vec![CHECK_OUT_REQUIRED]);
    }

    #[test]
    fn parses_iso_dates_and_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2030, 6, 15);

        assert_eq!(parse_calendar_date("2030-06-15"), expected);
        assert_eq!(parse_calendar_date("2030-06-15T10:30:00+05:30"), expected);
        assert_eq!(parse_calendar_date("15/06/2030"), None);
        assert_eq!(parse_calendar_date(""), None);
    }

    #[test]
    fn validates_against_local_today() {
        let today = Local::now().date_naive();
        let form = criteria(
            "Mumbai",
            &today.format("%Y-%m-%d").to_string(),
            &(today + Duration::days(1)).format("%Y-%m-%d").to_string(),
            2,
        );

        assert!(validate_search_form(&form).is_valid);
    }
}
