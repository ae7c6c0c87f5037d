use chrono::{DateTime, Months, Offset, TimeDelta, TimeZone};

use crate::error::{MilestoneError, Result};
use crate::unit::Unit;

/// Instant reached by adding `target` whole `unit`s to `birth`.
///
/// Years and months use calendar addition on the local date (chrono clamps
/// a missing day to the end of the month, so Feb 29 + 1 year is Feb 28).
/// The other units add a fixed number of milliseconds.
pub fn project<Tz: TimeZone>(birth: &DateTime<Tz>, unit: Unit, target: i64) -> Result<DateTime<Tz>> {
    let out_of_range = || MilestoneError::OutOfRange { unit, target };

    match unit.fixed_millis() {
        Some(ms) => {
            let delta = target
                .checked_mul(ms)
                .and_then(TimeDelta::try_milliseconds)
                .ok_or_else(out_of_range)?;
            birth
                .clone()
                .checked_add_signed(delta)
                .ok_or_else(out_of_range)
        }
        None => {
            let months = match unit {
                Unit::Years => target.checked_mul(12),
                _ => Some(target),
            }
            .and_then(|m| u32::try_from(m).ok())
            .ok_or_else(out_of_range)?;

            let naive = birth
                .naive_local()
                .checked_add_months(Months::new(months))
                .ok_or_else(out_of_range)?;

            let tz = birth.timezone();
            match tz.from_local_datetime(&naive).earliest() {
                Some(instant) => Ok(instant),
                // The wall-clock time does not exist (DST gap): keep the birth's offset.
                None => {
                    let utc = naive - birth.offset().fix();
                    Ok(tz.from_utc_datetime(&utc))
                }
            }
        }
    }
}

/// True when `instant` falls on the same calendar day as `now`, read in
/// `now`'s time zone.
pub fn is_today<Tz: TimeZone>(instant: &DateTime<Tz>, now: &DateTime<Tz>) -> bool {
    instant.with_timezone(&now.timezone()).date_naive() == now.date_naive()
}
