//! Day-keyed view over one fetched summary.

use std::collections::HashMap;

use api::DaySummary;
use time::Date;

use super::dates::parse_calendar_day;

/// Habit counts for a single day. Presence is meaningful on its own: a day
/// with no matching summary entry is "absent", not "zero habits".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCounts {
    pub amount: u32,
    pub completed: u32,
}

/// Summary entries keyed by calendar day, built once per fetch.
///
/// Matching is by (year, month, day) only; the time-of-day component of the
/// wire date is ignored. The first entry for a given day wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryIndex {
    by_day: HashMap<Date, DayCounts>,
}

impl SummaryIndex {
    pub fn from_entries(entries: &[DaySummary]) -> Self {
        let mut by_day = HashMap::with_capacity(entries.len());
        for entry in entries {
            let Some(day) = parse_calendar_day(&entry.date) else {
                tracing::warn!(
                    id = %entry.id,
                    date = %entry.date,
                    "ignoring summary entry with unparseable date"
                );
                continue;
            };
            by_day.entry(day).or_insert(DayCounts {
                amount: entry.amount,
                completed: entry.completed,
            });
        }
        Self { by_day }
    }

    pub fn counts_for(&self, day: Date) -> Option<DayCounts> {
        self.by_day.get(&day).copied()
    }

    pub fn len(&self) -> usize {
        self.by_day.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn entry(id: &str, date: &str, amount: u32, completed: u32) -> DaySummary {
        DaySummary {
            id: id.into(),
            date: date.into(),
            amount,
            completed,
        }
    }

    #[test]
    fn matches_by_calendar_day_regardless_of_time() {
        let index = SummaryIndex::from_entries(&[entry("x", "2024-03-10T18:30:00Z", 5, 3)]);

        assert_eq!(
            index.counts_for(date!(2024 - 03 - 10)),
            Some(DayCounts {
                amount: 5,
                completed: 3
            })
        );
        assert_eq!(index.counts_for(date!(2024 - 03 - 11)), None);
    }

    #[test]
    fn first_entry_wins_on_duplicate_days() {
        let index = SummaryIndex::from_entries(&[
            entry("a", "2024-03-10T00:00:00Z", 5, 3),
            entry("b", "2024-03-10T12:00:00Z", 9, 9),
        ]);

        assert_eq!(index.len(), 1);
        assert_eq!(
            index.counts_for(date!(2024 - 03 - 10)),
            Some(DayCounts {
                amount: 5,
                completed: 3
            })
        );
    }

    #[test]
    fn unparseable_dates_are_ignored() {
        let index = SummaryIndex::from_entries(&[
            entry("a", "not-a-date", 5, 3),
            entry("b", "2024-03-11T00:00:00Z", 2, 1),
        ]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.counts_for(date!(2024 - 03 - 11)).map(|c| c.amount), Some(2));
    }

    #[test]
    fn empty_summary_yields_empty_index() {
        assert!(SummaryIndex::from_entries(&[]).is_empty());
    }
}
