use chrono::{Datelike, NaiveDate, Weekday};
use lazycal_core::{month_grid, next_month, prev_month, CalendarView};

fn day(text: &str) -> NaiveDate {
    text.parse().unwrap()
}

#[test]
fn grid_spans_whole_weeks_from_sunday_to_saturday() {
    for reference in ["2024-06-15", "2024-02-01", "2023-12-31", "2026-02-10"] {
        let grid = month_grid(day(reference));
        assert_eq!(grid.len() % 7, 0, "reference {reference}");
        assert_eq!(grid[0].date.weekday(), Weekday::Sun, "reference {reference}");
        assert_eq!(
            grid.last().unwrap().date.weekday(),
            Weekday::Sat,
            "reference {reference}"
        );
    }
}

#[test]
fn grid_contains_every_day_of_the_month_exactly_once() {
    let reference = day("2024-06-15");
    let grid = month_grid(reference);

    for day_of_month in 1..=30 {
        let date = reference.with_day(day_of_month).unwrap();
        let count = grid
            .iter()
            .filter(|cell| cell.date == date && cell.in_month)
            .count();
        assert_eq!(count, 1, "day {day_of_month}");
    }
}

#[test]
fn leading_and_trailing_days_are_flagged_out_of_month() {
    // June 2024 starts on a Saturday and ends on a Sunday.
    let grid = month_grid(day("2024-06-15"));

    assert_eq!(grid[0].date, day("2024-05-26"));
    assert!(!grid[0].in_month);
    assert_eq!(grid.last().unwrap().date, day("2024-07-06"));
    assert!(!grid.last().unwrap().in_month);
    assert!(grid.iter().filter(|cell| cell.in_month).count() == 30);
}

#[test]
fn month_starting_sunday_and_ending_saturday_needs_no_filler() {
    // February 2026: Feb 1 is a Sunday, Feb 28 a Saturday.
    let grid = month_grid(day("2026-02-10"));
    assert_eq!(grid.len(), 28);
    assert!(grid.iter().all(|cell| cell.in_month));
}

#[test]
fn grid_is_identical_for_any_reference_day_within_the_month() {
    let from_first = month_grid(day("2024-06-01"));
    let from_mid = month_grid(day("2024-06-15"));
    let from_last = month_grid(day("2024-06-30"));
    assert_eq!(from_first, from_mid);
    assert_eq!(from_mid, from_last);
}

#[test]
fn navigation_clamps_day_of_month_at_short_months() {
    assert_eq!(next_month(day("2024-01-31")), day("2024-02-29"));
    assert_eq!(next_month(day("2023-01-31")), day("2023-02-28"));
    assert_eq!(prev_month(day("2024-03-31")), day("2024-02-29"));
    assert_eq!(prev_month(next_month(day("2024-06-15"))), day("2024-06-15"));
}

#[test]
fn view_opens_on_the_month_containing_today() {
    let view = CalendarView::new(day("2024-06-15"));
    assert_eq!(view.month(), day("2024-06-01"));
    assert_eq!(view.selected(), day("2024-06-15"));
}

#[test]
fn view_navigation_moves_month_but_not_selection() {
    let mut view = CalendarView::new(day("2024-06-15"));
    view.next_month();
    view.next_month();
    view.prev_month();
    assert_eq!(view.month(), day("2024-07-01"));
    assert_eq!(view.selected(), day("2024-06-15"));
}

#[test]
fn go_to_today_resets_month_and_selection() {
    let mut view = CalendarView::new(day("2024-06-15"));
    view.next_month();
    view.select(day("2024-07-20"));

    view.go_to_today(day("2024-06-15"));
    assert_eq!(view.month(), day("2024-06-01"));
    assert_eq!(view.selected(), day("2024-06-15"));
}

#[test]
fn selecting_an_adjacent_month_day_moves_the_visible_month() {
    let mut view = CalendarView::new(day("2024-06-15"));
    // May 26 renders as a leading filler cell of the June grid.
    view.select(day("2024-05-26"));
    assert_eq!(view.month(), day("2024-05-01"));
    assert_eq!(view.selected(), day("2024-05-26"));

    // Selecting inside the visible month leaves the month alone.
    view.select(day("2024-05-10"));
    assert_eq!(view.month(), day("2024-05-01"));
}

#[test]
fn jump_to_month_keeps_the_year() {
    let mut view = CalendarView::new(day("2024-06-15"));
    view.jump_to_month(11);
    assert_eq!(view.month(), day("2024-11-01"));

    view.jump_to_month(13);
    assert_eq!(view.month(), day("2024-11-01"));
}

#[test]
fn view_days_matches_month_grid() {
    let view = CalendarView::new(day("2024-06-15"));
    assert_eq!(view.days(), month_grid(day("2024-06-15")));
}
