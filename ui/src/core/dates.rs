//! Calendar-day helpers for the year-progress grid.

use time::macros::format_description;
use time::{Date, Month, OffsetDateTime};

/// Current calendar day, UTC. Day cells and the detail route both carry the
/// `...T00:00:00.000Z` serialization, so "today" follows the same clock.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Ascending calendar days from January 1 of `today`'s year through `today`
/// inclusive.
pub fn dates_from_year_start(today: Date) -> Vec<Date> {
    let start = Date::from_calendar_date(today.year(), Month::January, 1)
        .expect("January 1 exists in every year");

    let mut dates = Vec::with_capacity(today.ordinal() as usize);
    let mut current = start;
    while current <= today {
        dates.push(current);
        match current.next_day() {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

/// Midnight-UTC ISO-8601 serialization of `date`, e.g.
/// `2024-03-10T00:00:00.000Z`. This is the shape the detail route receives.
pub fn iso_midnight_utc(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}T00:00:00.000Z",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Parses the calendar-day component of an ISO-8601 string, ignoring any
/// time-of-day or offset suffix.
pub fn parse_calendar_day(value: &str) -> Option<Date> {
    let day_part = value.get(..10)?;
    Date::parse(day_part, &format_description!("[year]-[month]-[day]")).ok()
}
