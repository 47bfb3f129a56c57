use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Current and longest consecutive-day runs over a completion history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Streaks plus the bookkeeping the habit views show next to them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub streak: StreakResult,
    pub total_days: u32,
    pub last_date: Option<NaiveDate>,
}

/// Compute the current and longest streak of `dates` as seen on `reference`.
///
/// Input order and duplicates do not matter. The current streak is the run ending on
/// `reference` itself: if `reference` is missing it is zero even when yesterday was
/// completed. Dates after `reference` are ignored by the current streak but still belong
/// to the history scanned for the longest one.
pub fn compute_streaks<I>(dates: I, reference: NaiveDate) -> StreakResult
where
    I: IntoIterator<Item = NaiveDate>,
{
    let distinct: BTreeSet<NaiveDate> = dates.into_iter().collect();
    streaks_over(&distinct, reference)
}

/// Same as [`compute_streaks`] with the distinct-day count and most recent day.
pub fn compute_streak_summary<I>(dates: I, reference: NaiveDate) -> StreakSummary
where
    I: IntoIterator<Item = NaiveDate>,
{
    let distinct: BTreeSet<NaiveDate> = dates.into_iter().collect();

    StreakSummary {
        streak: streaks_over(&distinct, reference),
        total_days: distinct.len() as u32,
        last_date: distinct.last().copied(),
    }
}

fn streaks_over(distinct: &BTreeSet<NaiveDate>, reference: NaiveDate) -> StreakResult {
    StreakResult {
        current_streak: current_run(distinct, reference),
        longest_streak: longest_run(distinct),
    }
}

fn current_run(distinct: &BTreeSet<NaiveDate>, reference: NaiveDate) -> u32 {
    let mut run = 0u32;
    let mut cursor = Some(reference);

    while let Some(day) = cursor {
        if !distinct.contains(&day) {
            break;
        }
        run += 1;
        cursor = day.checked_sub_days(Days::new(1));
    }

    run
}

fn longest_run(distinct: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut previous: Option<NaiveDate> = None;

    for &day in distinct {
        run = match previous.and_then(|p| p.succ_opt()) {
            Some(expected) if expected == day => run + 1,
            _ => {
                longest = longest.max(run);
                1
            }
        };
        previous = Some(day);
    }

    longest.max(run)
}
