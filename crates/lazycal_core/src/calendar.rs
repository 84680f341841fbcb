//! Month grid generation and month navigation.
//!
//! # Responsibility
//! - Produce the Sunday-start day grid covering a reference month,
//!   including leading/trailing days from adjacent months.
//! - Provide pure month arithmetic and the view cursor (visible month +
//!   selected day) the presentation layer drives.
//!
//! # Invariants
//! - The grid always spans whole weeks: its length is a multiple of 7,
//!   the first cell is a Sunday and the last a Saturday.
//! - Every day of the reference month appears exactly once.
//! - All functions here are pure; same inputs, same grid.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    /// The calendar day this cell renders.
    pub date: NaiveDate,
    /// Whether the day belongs to the reference month, as opposed to a
    /// leading/trailing filler day from an adjacent month.
    pub in_month: bool,
}

/// Returns the first day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Returns the last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(date)
}

/// Advances by one calendar month, clamping the day-of-month when the
/// target month is shorter (Jan 31 -> Feb 29 in a leap year).
pub fn next_month(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(1)).unwrap_or(date)
}

/// Steps back by one calendar month with the same clamping rule.
pub fn prev_month(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(1)).unwrap_or(date)
}

/// Builds the day grid for the month containing `reference`.
///
/// Cells run from the Sunday on/before the 1st through the Saturday
/// on/after the last day of the month. `in_month` compares each cell's
/// month/year against the reference month.
pub fn month_grid(reference: NaiveDate) -> Vec<GridDay> {
    let first = start_of_month(reference);
    let last = end_of_month(reference);

    let lead = u64::from(first.weekday().num_days_from_sunday());
    let trail = u64::from(Weekday::Sat.num_days_from_sunday() - last.weekday().num_days_from_sunday());
    let grid_start = first.checked_sub_days(Days::new(lead)).unwrap_or(first);
    let grid_end = last.checked_add_days(Days::new(trail)).unwrap_or(last);

    grid_start
        .iter_days()
        .take_while(|day| *day <= grid_end)
        .map(|date| GridDay {
            date,
            in_month: date.month() == first.month() && date.year() == first.year(),
        })
        .collect()
}

/// View cursor over the calendar: the visible month plus the selected
/// day. Mirrors what the presentation layer needs to render the main
/// grid and the per-day event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    month: NaiveDate,
    selected: NaiveDate,
}

impl CalendarView {
    /// Opens the view on the month containing `today`, with `today`
    /// selected.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            month: start_of_month(today),
            selected: today,
        }
    }

    /// First day of the currently visible month.
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    /// Currently selected day.
    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    /// Day grid for the visible month.
    pub fn days(&self) -> Vec<GridDay> {
        month_grid(self.month)
    }

    /// Moves the visible month forward. Selection is untouched.
    pub fn next_month(&mut self) {
        self.month = next_month(self.month);
    }

    /// Moves the visible month backward. Selection is untouched.
    pub fn prev_month(&mut self) {
        self.month = prev_month(self.month);
    }

    /// Resets the visible month to the one containing `today` and the
    /// selection to `today`.
    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.month = start_of_month(today);
        self.selected = today;
    }

    /// Selects a day. Picking a leading/trailing day from an adjacent
    /// month also moves the visible month there.
    pub fn select(&mut self, date: NaiveDate) {
        self.selected = date;
        let month_of_date = start_of_month(date);
        if month_of_date != self.month {
            self.month = month_of_date;
        }
    }

    /// Jumps to month `month` (1-12) within the currently visible year.
    /// Out-of-range values are ignored.
    pub fn jump_to_month(&mut self, month: u32) {
        if let Some(target) = self.month.with_month(month) {
            self.month = target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{end_of_month, next_month, prev_month, start_of_month};
    use chrono::NaiveDate;

    fn day(text: &str) -> NaiveDate {
        text.parse().unwrap()
    }

    #[test]
    fn month_bounds() {
        assert_eq!(start_of_month(day("2024-06-15")), day("2024-06-01"));
        assert_eq!(end_of_month(day("2024-06-15")), day("2024-06-30"));
        assert_eq!(end_of_month(day("2024-02-01")), day("2024-02-29"));
        assert_eq!(end_of_month(day("2023-02-01")), day("2023-02-28"));
    }

    #[test]
    fn month_arithmetic_clamps_short_months() {
        assert_eq!(next_month(day("2024-01-31")), day("2024-02-29"));
        assert_eq!(prev_month(day("2024-03-31")), day("2024-02-29"));
        assert_eq!(next_month(day("2024-04-30")), day("2024-05-30"));
    }
}
