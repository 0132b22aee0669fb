//! Calendar and clock normalization
//!
//! Date components typed by a user are not validated against the calendar.
//! Instead they roll over the way a wall calendar would:
//! - a month outside 1..=12 carries into the year (month 13 of 2025 is January 2026,
//!   month 0 is December of the previous year)
//! - a day outside the month carries into the neighbouring months (February 30 is
//!   March 1 or 2, day 0 is the last day of the previous month)
//!
//! The rollover is computed here explicitly rather than left to date-library
//! arithmetic. Results chrono cannot represent yield `None`.

use chrono::{Days, NaiveDate, NaiveTime};

/// Meridiem marker following a clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Parse "am"/"pm" in any letter case
    pub fn parse(marker: &str) -> Option<Self> {
        if marker.eq_ignore_ascii_case("am") {
            Some(Meridiem::Am)
        } else if marker.eq_ignore_ascii_case("pm") {
            Some(Meridiem::Pm)
        } else {
            None
        }
    }
}

/// Convert a clock reading into a time of day
///
/// `pm` adds twelve hours unless the hour is already 12, `am` turns 12 into 0.
/// Without a meridiem the hour is taken as 24-hour time. Returns `None` when the
/// converted hour or the minute is out of range (e.g. "13pm", "25:00", "9:75").
pub fn clock_time(hour: u32, minute: u32, meridiem: Option<Meridiem>) -> Option<NaiveTime> {
    let hour = match meridiem {
        Some(Meridiem::Pm) if hour != 12 => hour + 12,
        Some(Meridiem::Am) if hour == 12 => 0,
        _ => hour,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Build a date from possibly out-of-range components, rolling over as needed
pub fn rollover_date(year: i32, month: i64, day: i64) -> Option<NaiveDate> {
    let months_since_epoch = i64::from(year) * 12 + (month - 1);
    let year = i32::try_from(months_since_epoch.div_euclid(12)).ok()?;
    let month = u32::try_from(months_since_epoch.rem_euclid(12) + 1).ok()?;
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;

    let offset = day - 1;
    if offset >= 0 {
        first_of_month.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        first_of_month.checked_sub_days(Days::new(offset.unsigned_abs()))
    }
}

/// Resolve a year typed by the user
///
/// Two-digit years are taken relative to 2000 ("25" is 2025). Any other length
/// is used as written.
pub fn expand_year(digits: &str) -> Option<i32> {
    let value: i32 = digits.parse().ok()?;
    if digits.len() == 2 {
        Some(2000 + value)
    } else {
        Some(value)
    }
}

/// Add a number of days to a reference date
pub fn days_after(reference: NaiveDate, days: u64) -> Option<NaiveDate> {
    reference.checked_add_days(Days::new(days))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_clock_time_meridiem() {
        assert_eq!(clock_time(5, 0, Some(Meridiem::Pm)), NaiveTime::from_hms_opt(17, 0, 0));
        assert_eq!(clock_time(12, 0, Some(Meridiem::Pm)), NaiveTime::from_hms_opt(12, 0, 0));
        assert_eq!(clock_time(12, 30, Some(Meridiem::Am)), NaiveTime::from_hms_opt(0, 30, 0));
        assert_eq!(clock_time(10, 0, Some(Meridiem::Am)), NaiveTime::from_hms_opt(10, 0, 0));
        assert_eq!(clock_time(14, 30, None), NaiveTime::from_hms_opt(14, 30, 0));
    }

    #[test]
    fn test_clock_time_out_of_range() {
        assert!(clock_time(13, 0, Some(Meridiem::Pm)).is_none());
        assert!(clock_time(25, 0, None).is_none());
        assert!(clock_time(9, 75, None).is_none());
    }

    #[test]
    fn test_meridiem_parse() {
        assert_eq!(Meridiem::parse("PM"), Some(Meridiem::Pm));
        assert_eq!(Meridiem::parse("am"), Some(Meridiem::Am));
        assert_eq!(Meridiem::parse("noon"), None);
    }

    #[test]
    fn test_rollover_valid_date_unchanged() {
        assert_eq!(rollover_date(2025, 12, 25), Some(ymd(2025, 12, 25)));
        assert_eq!(rollover_date(2024, 2, 29), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn test_rollover_day_overflow() {
        assert_eq!(rollover_date(2025, 2, 30), Some(ymd(2025, 3, 2)));
        assert_eq!(rollover_date(2024, 2, 30), Some(ymd(2024, 3, 1)));
        assert_eq!(rollover_date(2025, 4, 31), Some(ymd(2025, 5, 1)));
        assert_eq!(rollover_date(2025, 12, 32), Some(ymd(2026, 1, 1)));
    }

    #[test]
    fn test_rollover_zero_components() {
        assert_eq!(rollover_date(2025, 3, 0), Some(ymd(2025, 2, 28)));
        assert_eq!(rollover_date(2025, 0, 15), Some(ymd(2024, 12, 15)));
    }

    #[test]
    fn test_rollover_month_overflow() {
        assert_eq!(rollover_date(2025, 13, 1), Some(ymd(2026, 1, 1)));
        assert_eq!(rollover_date(2025, 99, 1), Some(ymd(2033, 3, 1)));
    }

    #[test]
    fn test_expand_year() {
        assert_eq!(expand_year("26"), Some(2026));
        assert_eq!(expand_year("2031"), Some(2031));
        assert_eq!(expand_year("202"), Some(202));
    }

    #[test]
    fn test_days_after() {
        assert_eq!(days_after(ymd(2025, 12, 30), 3), Some(ymd(2026, 1, 2)));
        assert!(days_after(ymd(2025, 1, 1), u64::MAX).is_none());
    }
}
