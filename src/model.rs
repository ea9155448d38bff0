use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_VERSION: u32 = 1;

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Per-day commit counts. Serializes as a plain JSON object keyed by
/// `YYYY-MM-DD`; the BTreeMap keeps keys in ascending date order so the
/// ledger file is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    counts: BTreeMap<NaiveDate, u64>,
}

impl Ledger {
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Increments the count for `date`, creating the entry at 1 if absent.
    /// Returns the new count.
    pub fn record(&mut self, date: NaiveDate) -> u64 {
        let count = self.counts.entry(date).or_insert(0);
        *count += 1;
        *count
    }

    pub fn count(&self, date: NaiveDate) -> u64 {
        self.counts.get(&date).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn active_days(&self) -> usize {
        self.counts.len()
    }

    /// The `n`-day window ending at `end`, in chronological order, with 0 for
    /// days that were never recorded.
    pub fn last_days(&self, end: NaiveDate, n: u64) -> Vec<DayCount> {
        (0..n)
            .rev()
            .filter_map(|back| end.checked_sub_days(Days::new(back)))
            .map(|date| DayCount {
                date,
                count: self.count(date),
            })
            .collect()
    }

    /// The `n` busiest days, count descending. The sort is stable over the
    /// map's date order, so equal counts come out earliest-date first.
    pub fn top_days(&self, n: usize) -> Vec<DayCount> {
        let mut days: Vec<DayCount> = self
            .counts
            .iter()
            .map(|(&date, &count)| DayCount { date, count })
            .collect();
        days.sort_by(|a, b| b.count.cmp(&a.count));
        days.truncate(n);
        days
    }

    pub fn month_total(&self, year: i32, month: u32) -> u64 {
        self.counts
            .iter()
            .filter(|(date, _)| date.year() == year && date.month() == month)
            .map(|(_, &count)| count)
            .sum()
    }

    /// Buckets every recorded date by weekday, in fixed Sunday→Saturday
    /// order. A weekday with no recorded dates gets total 0 and average 0.0.
    pub fn weekday_buckets(&self) -> Vec<WeekdayBucket> {
        let mut totals = [0u64; 7];
        let mut days = [0u32; 7];
        for (&date, &count) in &self.counts {
            let idx = date.weekday().num_days_from_sunday() as usize;
            totals[idx] += count;
            days[idx] += 1;
        }

        WEEKDAY_NAMES
            .iter()
            .enumerate()
            .map(|(idx, name)| WeekdayBucket {
                weekday: (*name).to_string(),
                total: totals[idx],
                days: days[idx],
                average: if days[idx] == 0 {
                    0.0
                } else {
                    totals[idx] as f64 / days[idx] as f64
                },
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekdayBucket {
    pub weekday: String,
    pub total: u64,
    pub days: u32,
    pub average: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub total_commits: u64,
    pub active_days: usize,
    pub last_week: Vec<DayCount>,
    pub top_days: Vec<DayCount>,
    pub weekly_average: f64,
    pub month_total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub total_commits: u64,
    pub buckets: Vec<WeekdayBucket>,
}
