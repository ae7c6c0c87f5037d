//! Round-number milestone candidates for an elapsed count.
//!
//! Every branch emits up to five evenly spaced step multiples starting at the
//! first multiple `>= current`, then appends the next multiple of the coarser
//! power of ten (`10^digits`) when it is not already there. The result is
//! never empty, strictly ascending and entirely positive.

use crate::unit::Unit;

const STEPS: i64 = 5;
const SMALL_AGE: i64 = 20;
const MONTHS_SMALL: [i64; 5] = [10, 20, 30, 40, 50];

/// Ordered milestone candidates for `current` elapsed `unit`s.
/// The first entry is the default pick. Negative counts are treated as 0.
pub fn milestone_options(current: i64, unit: Unit) -> Vec<i64> {
    let current = current.max(0);
    let digits = digit_count(current);

    let mut options = match unit {
        Unit::Years if current < SMALL_AGE => (1..=STEPS).map(|i| current + i).collect(),
        Unit::Years => step_multiples(current, pow10(digits - 1)),
        Unit::Months if current < 10 => MONTHS_SMALL
            .into_iter()
            .filter(|&m| m >= current)
            .collect(),
        Unit::Months if current < 100 => step_multiples(current, 10),
        Unit::Months => step_multiples(current, 100),
        Unit::Weeks => step_multiples(current, pow10(digits - 1).min(100)),
        Unit::Days => step_multiples(current, pow10(digits - 1).min(1000)),
        Unit::Minutes | Unit::Seconds => step_multiples(current, pow10(digits.saturating_sub(2))),
    };

    if let Some(coarse) = next_multiple(current, pow10(digits)) {
        if !options.contains(&coarse) {
            options.push(coarse);
        }
    }

    options
}

/// Decimal digits of `n`, with 0 counting as one digit.
pub fn digit_count(n: i64) -> u32 {
    if n <= 0 { 1 } else { n.ilog10() + 1 }
}

fn pow10(exp: u32) -> i64 {
    10i64.checked_pow(exp).unwrap_or(i64::MAX)
}

/// Smallest positive multiple of `step` that is `>= current`.
fn next_multiple(current: i64, step: i64) -> Option<i64> {
    let floor = current.max(1);
    let quotient = floor.checked_add(step - 1)? / step;
    quotient.checked_mul(step)
}

fn step_multiples(current: i64, step: i64) -> Vec<i64> {
    let Some(first) = next_multiple(current, step) else {
        return vec![current.max(1)];
    };
    (0..STEPS)
        .map_while(|i| first.checked_add(step * i))
        .collect()
}
