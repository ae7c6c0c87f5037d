//! Milestone record assembly.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::elapsed::elapsed;
use crate::error::Result;
use crate::options::milestone_options;
use crate::projection::{is_today, project};
use crate::unit::Unit;

/// Caller-owned milestone picks, one optional value per unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selections(BTreeMap<Unit, i64>);

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, unit: Unit) -> Option<i64> {
        self.0.get(&unit).copied()
    }

    /// Records a pick, replacing any earlier one for the same unit.
    pub fn set(&mut self, unit: Unit, milestone: i64) {
        self.0.insert(unit, milestone);
    }

    pub fn clear(&mut self, unit: Unit) {
        self.0.remove(&unit);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copies every pick from `other` over this one.
    pub fn merge(&mut self, other: Selections) {
        self.0.extend(other.0);
    }
}

impl FromIterator<(Unit, i64)> for Selections {
    fn from_iter<I: IntoIterator<Item = (Unit, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Elapsed count, candidate milestones and projected date for one unit.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = ""))]
pub struct MilestoneRecord<Tz: TimeZone> {
    pub unit: Unit,
    pub current: i64,
    pub selected: i64,
    pub options: Vec<i64>,
    pub target_date: DateTime<Tz>,
    pub is_today: bool,
}

/// Order in which [`MilestoneEngine::compute`] returns records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordOrder {
    /// Years first, seconds last.
    #[default]
    Canonical,
    /// Milestones landing today first, then by soonest target date.
    Proximity,
}

/// Stateless milestone calculator. Every call recomputes from its inputs.
#[derive(Debug, Clone, Default)]
pub struct MilestoneEngine {
    order: RecordOrder,
}

impl MilestoneEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(mut self, order: RecordOrder) -> Self {
        self.order = order;
        self
    }

    /// One record per unit for someone born at `birth`, evaluated at `now`.
    /// A `birth` after `now` yields negative `current` amounts; callers
    /// screen those out with [`crate::birth::parse_birth`].
    pub fn compute<Tz: TimeZone>(
        &self,
        birth: &DateTime<Tz>,
        now: &DateTime<Tz>,
        selections: &Selections,
    ) -> Result<Vec<MilestoneRecord<Tz>>> {
        let mut records = Unit::ALL
            .into_iter()
            .map(|unit| self.record(birth, now, unit, selections.get(unit)))
            .collect::<Result<Vec<_>>>()?;

        if self.order == RecordOrder::Proximity {
            sort_by_proximity(&mut records);
        }

        Ok(records)
    }

    /// Builds the record for a single unit. `selection` is used when it is
    /// positive and projectable, otherwise the first option is.
    pub fn record<Tz: TimeZone>(
        &self,
        birth: &DateTime<Tz>,
        now: &DateTime<Tz>,
        unit: Unit,
        selection: Option<i64>,
    ) -> Result<MilestoneRecord<Tz>> {
        let current = elapsed(birth, now, unit);
        let options = milestone_options(current, unit);

        let chosen = selection
            .filter(|&milestone| milestone > 0)
            .and_then(|milestone| Some((milestone, project(birth, unit, milestone).ok()?)));

        let (selected, target_date) = match chosen {
            Some(pick) => pick,
            None => {
                if let Some(milestone) = selection {
                    warn!(%unit, milestone, "ignoring unusable milestone selection");
                }
                let first = options[0];
                (first, project(birth, unit, first)?)
            }
        };

        let is_today = is_today(&target_date, now);
        debug!(%unit, current, selected, is_today, "milestone computed");

        Ok(MilestoneRecord {
            unit,
            current,
            selected,
            options,
            target_date,
            is_today,
        })
    }
}

/// Sorts records so that today's milestones come first, then the soonest.
pub fn sort_by_proximity<Tz: TimeZone>(records: &mut [MilestoneRecord<Tz>]) {
    records.sort_by(|a, b| {
        b.is_today
            .cmp(&a.is_today)
            .then_with(|| a.target_date.cmp(&b.target_date))
    });
}
