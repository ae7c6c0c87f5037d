//! elapsed.rs
//!
//! Whole units elapsed between a birth instant and "now".
//!
//! Years and months are counted on the calendar of `now`'s time zone:
//!   • years drop by one until this year's (month, day) anniversary is reached
//!   • months are a plain year/month difference, ignoring the day of month
//!
//! Weeks, days, minutes and seconds are floor divisions of the millisecond
//! difference, so a day is always 86 400 000 ms regardless of DST.
//!
//! The human-readable breakdown ("X years, Y months, Z days") uses the
//! borrowing rules chrono does not provide on its own.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use std::collections::BTreeMap;
use std::fmt;

use crate::unit::Unit;

/// Whole `unit`s elapsed from `birth` to `now`. Negative when `birth` is later.
pub fn elapsed<Tz: TimeZone>(birth: &DateTime<Tz>, now: &DateTime<Tz>, unit: Unit) -> i64 {
    match unit.fixed_millis() {
        Some(ms) => (now.timestamp_millis() - birth.timestamp_millis()).div_euclid(ms),
        None => {
            let birth = birth.with_timezone(&now.timezone());
            let years = (now.year() - birth.year()) as i64;
            let months = now.month() as i64 - birth.month() as i64;

            match unit {
                Unit::Months => years * 12 + months,
                _ if (now.month(), now.day()) < (birth.month(), birth.day()) => years - 1,
                _ => years,
            }
        }
    }
}

/// Elapsed amount for every unit, keyed in canonical order.
pub fn elapsed_all<Tz: TimeZone>(birth: &DateTime<Tz>, now: &DateTime<Tz>) -> BTreeMap<Unit, i64> {
    Unit::ALL
        .into_iter()
        .map(|unit| (unit, elapsed(birth, now, unit)))
        .collect()
}

/// Calendar age split into years, months and days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBreakdown {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

/// Returns the human age between two calendar dates.
pub fn age_breakdown(birthdate: NaiveDate, today: NaiveDate) -> AgeBreakdown {
    let mut years = today.year() - birthdate.year();
    let mut months = today.month() as i32 - birthdate.month() as i32;
    let mut days = today.day() as i32 - birthdate.day() as i32;

    // Fix day underflow
    if days < 0 {
        months -= 1;

        let (prev_year, prev_month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };

        days += days_in_month(prev_year, prev_month) as i32;
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    AgeBreakdown {
        years,
        months,
        days,
    }
}

impl fmt::Display for AgeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

fn plural(n: i32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Number of days in a given year/month (28–31)
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// Gregorian leap-year rule
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
