use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

/// Inclusive calendar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn len_days(&self) -> u32 {
        ((self.end - self.start).num_days() + 1).max(0) as u32
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// The `days` days ending on `today`, inclusive.
pub fn trailing_days(today: NaiveDate, days: u32) -> DateRange {
    let back = u64::from(days.max(1) - 1);
    let start = today.checked_sub_days(Days::new(back)).unwrap_or(NaiveDate::MIN);
    DateRange::new(start, today)
}

/// Monday through Sunday of the week containing `date`.
pub fn week_of(date: NaiveDate) -> DateRange {
    let offset = u64::from(date.weekday().num_days_from_monday());
    let start = date.checked_sub_days(Days::new(offset)).unwrap_or(date);
    let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
    DateRange::new(start, end)
}

/// First through last day of the given month.
pub fn month_range(year: i32, month: u32) -> Option<DateRange> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = start
        .checked_add_months(Months::new(1))?
        .checked_sub_days(Days::new(1))?;
    Some(DateRange::new(start, end))
}

/// The `count` calendar months ending with the one containing `today`, oldest first.
pub fn months_back(today: NaiveDate, count: u32) -> Vec<DateRange> {
    let first = today.with_day(1).unwrap_or(today);
    let mut ranges: Vec<DateRange> = (0..count)
        .filter_map(|i| first.checked_sub_months(Months::new(i)))
        .filter_map(|start| month_range(start.year(), start.month()))
        .collect();
    ranges.reverse();
    ranges
}

/// ISO week label such as `2024-W01`.
pub fn iso_week_key(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}
