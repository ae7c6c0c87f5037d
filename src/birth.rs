//! Birth date input parsing and validation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::error::{MilestoneError, Result};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d.%m.%Y"];
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Reads a birth date (`YYYY-MM-DD`, `DD/MM/YYYY`, `DD.MM.YYYY`, optionally
/// with a time of day) as wall-clock time in `tz`.
pub fn parse_birth_local<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<DateTime<Tz>> {
    let trimmed = input.trim();
    let invalid = |reason: &str| MilestoneError::InvalidBirthInput {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("no date given"));
    }

    let naive = parse_naive(trimmed).ok_or_else(|| {
        invalid("expected YYYY-MM-DD, DD/MM/YYYY or YYYY-MM-DDTHH:MM[:SS]")
    })?;

    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| invalid("time does not exist in the local time zone"))
}

/// Parses `input` and rejects dates after `now`.
pub fn parse_birth<Tz: TimeZone>(input: &str, now: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let birth = parse_birth_local(input, &now.timezone())?;
    if birth > *now {
        return Err(MilestoneError::FutureBirthDate {
            birth: birth.naive_local().to_string(),
            now: now.naive_local().to_string(),
        });
    }
    Ok(birth)
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
