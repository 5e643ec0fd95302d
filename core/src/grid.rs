// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Month grid and week strip layout, Sunday first.

use jiff::ToSpan;
use jiff::civil::Date;

use crate::query::EventDates;
use crate::{Event, YearMonth};

/// Number of columns in a calendar grid.
pub const DAYS_PER_WEEK: usize = 7;

/// A populated day slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// The date of the cell.
    pub date: Date,
    /// Column index, 0 for Sunday through 6 for Saturday.
    pub column: u8,
    /// Whether the date is today.
    pub is_today: bool,
    /// Whether the date is the selected one.
    pub is_selected: bool,
    /// Whether at least one event falls on the date.
    pub has_event: bool,
}

impl DayCell {
    fn new(date: Date, today: Date, selected: Date, has_event: bool) -> Self {
        Self {
            date,
            column: date.weekday().to_sunday_zero_offset().unsigned_abs(),
            is_today: date == today,
            is_selected: date == selected,
            has_event,
        }
    }

    /// Whether the cell falls on a Sunday.
    #[must_use]
    pub fn is_sunday(&self) -> bool {
        self.column == 0
    }

    /// Whether the cell falls on a Saturday.
    #[must_use]
    pub fn is_saturday(&self) -> bool {
        self.column == 6
    }
}

/// One slot of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Filler before day 1 or after the last day.
    Blank,
    /// A day of the month.
    Day(DayCell),
}

impl GridCell {
    /// The day cell, `None` for blanks.
    #[must_use]
    pub fn day(&self) -> Option<&DayCell> {
        match self {
            GridCell::Blank => None,
            GridCell::Day(cell) => Some(cell),
        }
    }
}

/// A row-major, seven-column month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    leading_blanks: usize,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Lays out `month`, marking days that carry one of `events`.
    #[must_use]
    pub fn build(month: YearMonth, today: Date, selected: Date, events: &[Event]) -> Self {
        let dates = EventDates::in_month(events, month);
        Self::build_with(month, today, selected, |d| dates.contains(d))
    }

    /// Lays out `month`, asking `has_event` for each day.
    pub fn build_with(
        month: YearMonth,
        today: Date,
        selected: Date,
        has_event: impl Fn(Date) -> bool,
    ) -> Self {
        let leading_blanks = usize::from(month.first_weekday().unsigned_abs());
        let days_in_month = usize::from(month.days_in_month().unsigned_abs());
        let total = (leading_blanks + days_in_month).div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;

        let mut cells = Vec::with_capacity(total);
        cells.resize(leading_blanks, GridCell::Blank);
        cells.extend(
            month
                .days()
                .map(|d| GridCell::Day(DayCell::new(d, today, selected, has_event(d)))),
        );
        cells.resize(total, GridCell::Blank);

        Self {
            month,
            leading_blanks,
            cells,
        }
    }

    /// The month laid out.
    #[must_use]
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// Number of blank cells before day 1, in `0..7`.
    #[must_use]
    pub fn leading_blanks(&self) -> usize {
        self.leading_blanks
    }

    /// All cells in row-major order, a multiple of seven long.
    #[must_use]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Iterates the grid one week row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Looks up the cell of a date of this month.
    #[must_use]
    pub fn cell(&self, date: Date) -> Option<&DayCell> {
        if !self.month.contains(date) {
            return None;
        }
        let index = self.leading_blanks + usize::from(date.day().unsigned_abs()) - 1;
        self.cells.get(index).and_then(GridCell::day)
    }
}

/// The seven days of a Sunday-started week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekStrip {
    start: Date,
    cells: Vec<DayCell>,
}

impl WeekStrip {
    /// The week containing `date`, marking days that carry one of `events`.
    ///
    /// # Errors
    ///
    /// Returns an error if the week starts before the minimum supported date.
    pub fn containing(
        date: Date,
        today: Date,
        selected: Date,
        events: &[Event],
    ) -> Result<Self, jiff::Error> {
        let dates = EventDates::from_events(events);
        Self::containing_with(date, today, selected, |d| dates.contains(d))
    }

    /// The week containing `date`, asking `has_event` for each day.
    ///
    /// # Errors
    ///
    /// Returns an error if the week starts before the minimum supported date.
    pub fn containing_with(
        date: Date,
        today: Date,
        selected: Date,
        has_event: impl Fn(Date) -> bool,
    ) -> Result<Self, jiff::Error> {
        let start = week_start(date)?;
        let cells = start
            .series(1.day())
            .take(DAYS_PER_WEEK)
            .map(|d| DayCell::new(d, today, selected, has_event(d)))
            .collect();
        Ok(Self { start, cells })
    }

    /// The Sunday the week starts on.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// The day cells, Sunday first.
    #[must_use]
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Any date of the previous week.
    ///
    /// # Errors
    ///
    /// Returns an error when stepping past the minimum supported date.
    pub fn prev_start(&self) -> Result<Date, jiff::Error> {
        self.start.checked_sub(1.week())
    }

    /// Any date of the next week.
    ///
    /// # Errors
    ///
    /// Returns an error when stepping past the maximum supported date.
    pub fn next_start(&self) -> Result<Date, jiff::Error> {
        self.start.checked_add(1.week())
    }
}

/// The Sunday on or before `date`.
///
/// # Errors
///
/// Returns an error if that Sunday is before the minimum supported date.
pub fn week_start(date: Date) -> Result<Date, jiff::Error> {
    let offset = date.weekday().to_sunday_zero_offset();
    date.checked_sub(i64::from(offset).days())
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;
    use crate::EventId;

    fn event_on(date: Date) -> Event {
        Event {
            id: Some(EventId::new(1)),
            date,
            title: "Standup".to_string(),
            start_time: time(9, 0, 0, 0),
            end_time: time(10, 0, 0, 0),
            location: String::new(),
            latitude: None,
            longitude: None,
            road_address: None,
            notes: String::new(),
            color_index: 0,
        }
    }

    #[test]
    fn month_grid_cell_count_is_full_weeks() {
        for year in [2023, 2024, 2025] {
            for m in 1..=12 {
                let month = YearMonth::new(year, m).unwrap();
                let today = date(2025, 1, 1);
                let grid = MonthGrid::build_with(month, today, today, |_| false);

                let days = usize::from(month.days_in_month().unsigned_abs());
                let expected = (grid.leading_blanks() + days).div_ceil(7) * 7;
                assert_eq!(grid.cells().len(), expected, "{month}");
                assert!(grid.leading_blanks() < 7, "{month}");
                assert_eq!(grid.cells().len() % 7, 0);
            }
        }
    }

    #[test]
    fn month_grid_march_2025_layout() {
        // 2025-03-01 is a Saturday
        let month = YearMonth::new(2025, 3).unwrap();
        let grid = MonthGrid::build_with(month, date(2025, 3, 10), date(2025, 3, 12), |_| false);

        assert_eq!(grid.leading_blanks(), 6);
        assert_eq!(grid.cells().len(), 42);
        assert!(grid.cells()[..6].iter().all(|c| *c == GridCell::Blank));
        assert!(grid.cells()[37..].iter().all(|c| *c == GridCell::Blank));

        let first = grid.cells()[6].day().unwrap();
        assert_eq!(first.date, date(2025, 3, 1));
        assert!(first.is_saturday());

        let tenth = grid.cell(date(2025, 3, 10)).unwrap();
        assert!(tenth.is_today);
        assert!(!tenth.is_selected);
        assert_eq!(tenth.column, 1);

        let twelfth = grid.cell(date(2025, 3, 12)).unwrap();
        assert!(twelfth.is_selected);
        assert!(!twelfth.is_today);
    }

    #[test]
    fn month_grid_february_starting_sunday() {
        // 2026-02-01 is a Sunday, 28 days fill exactly four rows
        let month = YearMonth::new(2026, 2).unwrap();
        let grid = MonthGrid::build_with(month, date(2026, 1, 1), date(2026, 1, 1), |_| false);

        assert_eq!(grid.leading_blanks(), 0);
        assert_eq!(grid.cells().len(), 28);
        assert_eq!(grid.rows().count(), 4);
        assert!(grid.cells().iter().all(|c| c.day().is_some()));
    }

    #[test]
    fn month_grid_marks_event_days() {
        let month = YearMonth::new(2025, 3).unwrap();
        let events = vec![event_on(date(2025, 3, 10))];

        let grid = MonthGrid::build(month, date(2025, 3, 1), date(2025, 3, 1), &events);

        assert!(grid.cell(date(2025, 3, 10)).unwrap().has_event);
        assert!(!grid.cell(date(2025, 3, 9)).unwrap().has_event);
        assert!(!grid.cell(date(2025, 3, 11)).unwrap().has_event);
        assert!(grid.cell(date(2025, 4, 10)).is_none());
    }

    #[test]
    fn week_strip_starts_on_sunday() {
        // 2025-03-12 is a Wednesday
        let strip = WeekStrip::containing_with(
            date(2025, 3, 12),
            date(2025, 3, 12),
            date(2025, 3, 12),
            |_| false,
        )
        .unwrap();

        assert_eq!(strip.start(), date(2025, 3, 9));
        assert_eq!(strip.cells().len(), 7);
        assert_eq!(strip.cells()[6].date, date(2025, 3, 15));
        assert!(strip.cells()[3].is_today);
        assert!(strip.cells()[0].is_sunday());
    }

    #[test]
    fn week_strip_on_sunday_is_same_week() {
        assert_eq!(week_start(date(2025, 3, 9)).unwrap(), date(2025, 3, 9));
        assert_eq!(week_start(date(2025, 3, 8)).unwrap(), date(2025, 3, 2));
    }

    #[test]
    fn week_strip_navigation_crosses_months() {
        let events = vec![event_on(date(2025, 3, 3))];
        let strip =
            WeekStrip::containing(date(2025, 3, 1), date(2025, 3, 1), date(2025, 3, 1), &events)
                .unwrap();

        assert_eq!(strip.start(), date(2025, 2, 23));
        assert_eq!(strip.prev_start().unwrap(), date(2025, 2, 16));
        assert_eq!(strip.next_start().unwrap(), date(2025, 3, 2));

        let next = WeekStrip::containing(
            strip.next_start().unwrap(),
            date(2025, 3, 1),
            date(2025, 3, 1),
            &events,
        )
        .unwrap();
        assert!(next.cells()[1].has_event);
        assert!(!next.cells()[0].has_event);
    }
}
