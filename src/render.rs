//! Plain-text and JSON views of a milestone computation.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::elapsed::AgeBreakdown;
use crate::engine::MilestoneRecord;
use crate::unit::Unit;

const LONG_DATE: &str = "%A, %B %-d, %Y";
const LABEL_WIDTH: usize = 11;

/// Everything a caller shows for one evaluation.
#[derive(Debug, Serialize)]
#[serde(bound(serialize = ""))]
pub struct Report<Tz: TimeZone> {
    pub birth: DateTime<Tz>,
    pub now: DateTime<Tz>,
    pub age: String,
    pub milestones: Vec<MilestoneRecord<Tz>>,
}

impl<Tz: TimeZone> Report<Tz> {
    pub fn new(
        birth: DateTime<Tz>,
        now: DateTime<Tz>,
        age: AgeBreakdown,
        milestones: Vec<MilestoneRecord<Tz>>,
    ) -> Self {
        Self {
            birth,
            now,
            age: age.to_string(),
            milestones,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let mut out = format!(
            "Born {}\nAge  {}\n",
            format_date(&self.birth),
            self.age
        );

        for record in &self.milestones {
            let options: Vec<String> = record.options.iter().map(|&o| group_thousands(o)).collect();
            let today = if record.is_today { "  << today!" } else { "" };

            out.push_str(&format!(
                "\n{}\n  {:<LABEL_WIDTH$}{}\n  {:<LABEL_WIDTH$}{} on {}{today}\n  {:<LABEL_WIDTH$}{}\n",
                title(record.unit),
                "current:",
                format_count(record.current, record.unit),
                "milestone:",
                format_count(record.selected, record.unit),
                format_date(&record.target_date),
                "options:",
                options.join(", ")
            ));
        }

        out
    }
}

/// Capitalized unit name, e.g. "Years".
pub fn title(unit: Unit) -> String {
    let name = unit.as_str();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "1,234 days", "1 year"
pub fn format_count(count: i64, unit: Unit) -> String {
    format!("{} {}", group_thousands(count), unit.label(count))
}

/// Long-form wall-clock date, e.g. "Sunday, March 15, 2054".
pub fn format_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.naive_local().format(LONG_DATE).to_string()
}

/// Inserts `,` between groups of three digits.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
