//! Week-aligned grid construction from per-day contribution records.

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, Month, Weekday};

use crate::core::format;

/// One calendar day's activity: the raw count plus its display intensity
/// bucket (0 = none … 4 = highest). Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// ISO calendar date with day precision ("YYYY-MM-DD").
    pub date: String,
    pub count: u32,
    pub level: u8,
}

impl DayRecord {
    /// Intensity bucket clamped into the displayable 0–4 range.
    pub fn display_level(&self) -> u8 {
        self.level.min(4)
    }
}

/// One week of the calendar. Invariant: `slots` always holds exactly 7
/// entries; empty slots appear only as a leading run in the grid's first
/// column or a trailing run in its last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekColumn {
    pub slots: Vec<Option<DayRecord>>,
}

impl WeekColumn {
    fn from_slots(slots: Vec<Option<DayRecord>>) -> Self {
        debug_assert_eq!(slots.len(), 7);
        Self { slots }
    }

    /// Earliest date present in this column, parsed.
    pub fn first_date(&self) -> Option<Date> {
        self.slots
            .iter()
            .find_map(|slot| slot.as_ref())
            .and_then(|record| parse_iso(&record.date))
    }
}

/// Week columns oldest-first. Rebuilt wholesale whenever new data arrives;
/// there is no mutation API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    pub columns: Vec<WeekColumn>,
}

impl Grid {
    /// Builds a week-aligned grid from an unordered batch of day records.
    ///
    /// Records are sorted ascending by their ISO date (day-precision ISO
    /// dates sort correctly as strings), the first column is padded up to
    /// the weekday of the earliest record, and the last column is padded
    /// out to 7 slots. Empty input yields an empty grid.
    ///
    /// Duplicate dates are not de-duplicated: the data source contract is
    /// at most one record per date, and behaviour on duplicates is
    /// undefined here.
    pub fn from_records(mut records: Vec<DayRecord>, week_start: Weekday) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        records.sort_by(|a, b| a.date.cmp(&b.date));

        let lead = records
            .first()
            .map(|record| leading_pad(&record.date, week_start))
            .unwrap_or(0);

        let mut columns = Vec::with_capacity((records.len() + lead + 6) / 7);
        let mut current: Vec<Option<DayRecord>> = Vec::with_capacity(7);
        current.extend(std::iter::repeat_with(|| None).take(lead));

        for record in records {
            current.push(Some(record));
            if current.len() == 7 {
                columns.push(WeekColumn::from_slots(current));
                current = Vec::with_capacity(7);
            }
        }

        if !current.is_empty() {
            while current.len() < 7 {
                current.push(None);
            }
            columns.push(WeekColumn::from_slots(current));
        }

        Self { columns }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// All records in calendar order, skipping padding.
    pub fn records(&self) -> impl Iterator<Item = &DayRecord> {
        self.columns
            .iter()
            .flat_map(|column| column.slots.iter().filter_map(|slot| slot.as_ref()))
    }

    pub fn record_for(&self, date: &str) -> Option<&DayRecord> {
        self.records().find(|record| record.date == date)
    }

    /// Per-column month label for the header row: the short month name on
    /// each column where a new month begins, `None` elsewhere.
    pub fn month_labels(&self) -> Vec<Option<&'static str>> {
        let mut labels = vec![None; self.columns.len()];
        let mut previous: Option<Month> = None;

        for (idx, column) in self.columns.iter().enumerate() {
            let Some(date) = column.first_date() else {
                continue;
            };
            if previous != Some(date.month()) {
                labels[idx] = Some(format::month_short(date.month()));
                previous = Some(date.month());
            }
        }

        labels
    }
}

/// Number of empty slots before the first record: the weekday index of its
/// date relative to the configured week start. Unparseable dates pad by 0.
fn leading_pad(date: &str, week_start: Weekday) -> usize {
    parse_iso(date)
        .map(|parsed| {
            let day = parsed.weekday().number_days_from_sunday() as usize;
            let start = week_start.number_days_from_sunday() as usize;
            (day + 7 - start) % 7
        })
        .unwrap_or(0)
}

pub(crate) fn parse_iso(date: &str) -> Option<Date> {
    Date::parse(date, format_description!("[year]-[month]-[day]")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, count: u32) -> DayRecord {
        DayRecord {
            date: date.to_string(),
            count,
            level: (count.min(4)) as u8,
        }
    }

    /// 2024-01-01 fell on a Monday, so a Sunday-start grid pads one slot.
    fn january_run(len: usize) -> Vec<DayRecord> {
        (0..len)
            .map(|offset| day(&format!("2024-01-{:02}", offset + 1), offset as u32))
            .collect()
    }

    #[test]
    fn column_count_follows_week_alignment() {
        let grid = Grid::from_records(january_run(10), Weekday::Sunday);
        // 10 records + 1 leading pad slot = 11 slots → 2 columns.
        assert_eq!(grid.columns.len(), 2);
        assert!(grid.columns.iter().all(|column| column.slots.len() == 7));
    }

    #[test]
    fn padding_only_at_the_ends() {
        let grid = Grid::from_records(january_run(10), Weekday::Sunday);

        let first = &grid.columns[0];
        assert!(first.slots[0].is_none());
        assert!(first.slots[1..].iter().all(|slot| slot.is_some()));

        let last = &grid.columns[1];
        assert!(last.slots[..4].iter().all(|slot| slot.is_some()));
        assert!(last.slots[4..].iter().all(|slot| slot.is_none()));
    }

    #[test]
    fn round_trip_preserves_sorted_records() {
        let mut records = january_run(17);
        // Shuffle deterministically; the grid must sort for itself.
        records.reverse();
        records.swap(2, 9);

        let grid = Grid::from_records(records.clone(), Weekday::Sunday);

        records.sort_by(|a, b| a.date.cmp(&b.date));
        let flattened: Vec<DayRecord> = grid.records().cloned().collect();
        assert_eq!(flattened, records);
    }

    #[test]
    fn empty_input_yields_zero_columns() {
        let grid = Grid::from_records(Vec::new(), Weekday::Sunday);
        assert!(grid.is_empty());
        assert_eq!(grid.columns.len(), 0);
    }

    #[test]
    fn week_start_shifts_the_leading_pad() {
        // Monday start: 2024-01-01 is the week's first day, no pad.
        let grid = Grid::from_records(january_run(7), Weekday::Monday);
        assert_eq!(grid.columns.len(), 1);
        assert!(grid.columns[0].slots.iter().all(|slot| slot.is_some()));
    }

    #[test]
    fn month_labels_mark_month_starts() {
        let mut records = january_run(31);
        for offset in 1..=7 {
            records.push(day(&format!("2024-02-{offset:02}"), 2));
        }

        let grid = Grid::from_records(records, Weekday::Sunday);
        let labels = grid.month_labels();

        assert_eq!(labels.len(), grid.columns.len());
        assert_eq!(labels[0], Some("Jan"));
        assert_eq!(labels.iter().filter(|label| label.is_some()).count(), 2);
        assert!(labels.contains(&Some("Feb")));
    }

    #[test]
    fn record_lookup_by_date() {
        let grid = Grid::from_records(january_run(5), Weekday::Sunday);
        assert_eq!(grid.record_for("2024-01-03").map(|r| r.count), Some(2));
        assert!(grid.record_for("2024-03-01").is_none());
    }
}
