use chrono::{DateTime, Datelike, Duration, FixedOffset, TimeZone, Utc};

use milestones::elapsed::{elapsed, elapsed_all};
use milestones::options::milestone_options;
use milestones::projection::{is_today, project};
use milestones::{MilestoneEngine, RecordOrder, Selections, Unit};

fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

#[test]
fn anniversary_scenarios() {
    let now = utc(2024, 3, 15);

    let on_day = elapsed_all(&utc(2000, 3, 15), &now);
    assert_eq!(on_day[&Unit::Years], 24);
    assert_eq!(on_day[&Unit::Months], 288);

    let day_before = elapsed_all(&utc(2000, 3, 16), &now);
    assert_eq!(day_before[&Unit::Years], 23);
}

#[test]
fn coarser_units_never_exceed_finer_ones() {
    let now = Utc.with_ymd_and_hms(2024, 7, 4, 18, 30, 15).unwrap();
    let births = [
        utc(1950, 12, 31),
        utc(1988, 2, 29),
        utc(2023, 7, 5),
        utc(2024, 6, 30),
        Utc.with_ymd_and_hms(2024, 6, 30, 23, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 7, 4, 18, 0, 0).unwrap(),
        now,
    ];

    for birth in births {
        let a = elapsed_all(&birth, &now);
        assert!(a[&Unit::Years] <= a[&Unit::Months], "{birth}: {a:?}");
        assert!(a[&Unit::Years] <= a[&Unit::Days], "{birth}: {a:?}");
        assert!(a[&Unit::Weeks] <= a[&Unit::Days], "{birth}: {a:?}");
        assert!(a[&Unit::Days] <= a[&Unit::Minutes], "{birth}: {a:?}");
        assert!(a[&Unit::Minutes] <= a[&Unit::Seconds], "{birth}: {a:?}");
    }
}

#[test]
fn months_can_lead_days_across_a_month_boundary() {
    // Month counting ignores the day of month, so two hours spanning
    // Jan 31 -> Feb 1 already count as a month but not yet as a day.
    let birth = Utc.with_ymd_and_hms(2020, 1, 31, 23, 0, 0).unwrap();
    let now = Utc.with_ymd_and_hms(2020, 2, 1, 1, 0, 0).unwrap();
    let a = elapsed_all(&birth, &now);
    assert_eq!(a[&Unit::Years], 0);
    assert_eq!(a[&Unit::Months], 1);
    assert_eq!(a[&Unit::Weeks], 0);
    assert_eq!(a[&Unit::Days], 0);
    assert_eq!(a[&Unit::Minutes], 120);
}

#[test]
fn elapsed_is_monotonic_in_now() {
    let birth = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap();
    let mut now = birth;
    let mut previous = elapsed_all(&birth, &now);

    for _ in 0..500 {
        now += Duration::hours(37);
        let current = elapsed_all(&birth, &now);
        for unit in Unit::ALL {
            assert!(current[&unit] >= previous[&unit], "{unit} went backwards at {now}");
        }
        previous = current;
    }
}

#[test]
fn small_and_round_year_options() {
    assert_eq!(milestone_options(7, Unit::Years), vec![8, 9, 10, 11, 12]);
    let adult = milestone_options(47, Unit::Years);
    assert_eq!(adult[0], 50);
    assert!(adult.contains(&100));
}

#[test]
fn options_total_over_counts() {
    for unit in Unit::ALL {
        for current in (0..2_000).chain([9_999, 10_000, 86_399, 1_000_000_007, 4_000_000_000]) {
            let options = milestone_options(current, unit);
            assert!(!options.is_empty(), "{unit} at {current}");
            assert!(options.windows(2).all(|w| w[0] < w[1]), "{unit} at {current}: {options:?}");
            assert!(options[0] >= current.max(1));
        }
    }
}

#[test]
fn projection_is_deterministic() {
    let tz = FixedOffset::east_opt(9 * 3600).unwrap();
    let birth = tz.with_ymd_and_hms(1971, 8, 31, 4, 5, 6).unwrap();
    for unit in Unit::ALL {
        for target in [1, 12, 100, 1_000, 1_000_000] {
            let first = project(&birth, unit, target);
            let second = project(&birth, unit, target);
            assert_eq!(first.ok(), second.ok(), "{unit} + {target}");
        }
    }
}

#[test]
fn is_today_matches_calendar_triple() {
    let birth = utc(1990, 5, 20);
    let now = Utc.with_ymd_and_hms(2024, 5, 20, 16, 0, 0).unwrap();

    for unit in Unit::ALL {
        for target in [1, 5, 34, 408, 1_773, 12_419, 17_884_800, 1_073_088_000] {
            let Ok(date) = project(&birth, unit, target) else {
                continue;
            };
            let same_triple = (date.year(), date.month(), date.day())
                == (now.year(), now.month(), now.day());
            assert_eq!(is_today(&date, &now), same_triple, "{unit} + {target}");
        }
    }
}

#[test]
fn records_follow_selections_and_defaults() {
    let birth = utc(1990, 5, 20);
    let now = Utc.with_ymd_and_hms(2024, 5, 20, 16, 0, 0).unwrap();
    let selections: Selections = [(Unit::Days, 20_000), (Unit::Seconds, -3)].into_iter().collect();

    let records = MilestoneEngine::new().compute(&birth, &now, &selections).unwrap();
    assert_eq!(records.len(), Unit::ALL.len());

    for record in &records {
        assert!(!record.options.is_empty());
        assert!(record.selected > 0);
        assert_eq!(record.current, elapsed(&birth, &now, record.unit));
        assert_eq!(
            record.target_date,
            project(&birth, record.unit, record.selected).unwrap()
        );
        match record.unit {
            Unit::Days => assert_eq!(record.selected, 20_000),
            _ => assert_eq!(record.selected, record.options[0]),
        }
    }
}

#[test]
fn proximity_ordering() {
    let birth = utc(1990, 5, 20);
    let now = Utc.with_ymd_and_hms(2024, 5, 20, 16, 0, 0).unwrap();

    let canonical = MilestoneEngine::new()
        .compute(&birth, &now, &Selections::new())
        .unwrap();
    let sorted = MilestoneEngine::new()
        .with_order(RecordOrder::Proximity)
        .compute(&birth, &now, &Selections::new())
        .unwrap();

    assert_eq!(canonical.len(), sorted.len());
    for pair in sorted.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.is_today >= b.is_today);
        if a.is_today == b.is_today {
            assert!(a.target_date <= b.target_date);
        }
    }
}

#[test]
fn newborn_gets_options_everywhere() {
    let birth = utc(2024, 5, 20);
    let records = MilestoneEngine::new()
        .compute(&birth, &birth, &Selections::new())
        .unwrap();

    for record in records {
        assert_eq!(record.current, 0);
        assert!(!record.options.is_empty());
        assert!(record.target_date > birth);
    }
}

#[test]
fn future_birth_is_computed_not_rejected() {
    let birth = utc(2025, 1, 1);
    let now = utc(2024, 1, 1);
    let records = MilestoneEngine::new()
        .compute(&birth, &now, &Selections::new())
        .unwrap();

    assert_eq!(records.len(), Unit::ALL.len());
    for record in &records {
        assert_eq!(record.current, elapsed(&birth, &now, record.unit));
        assert!(record.current < 0, "{}", record.unit);
        assert!(record.selected > 0);
    }
}
