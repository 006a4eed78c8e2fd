use dioxus::prelude::*;
use time::Date;

use crate::core::dates::iso_midnight_utc;
use crate::core::summary::DayCounts;

use super::nav::habit_day_link;

/// One tappable cell of the year grid. A cell without counts renders the
/// muted "no data" variant; a cell with counts gets an intensity class from
/// its completion percentage.
#[component]
pub fn HabitDay(date: Date, counts: Option<DayCounts>) -> Element {
    let iso = iso_midnight_utc(date);

    let class = match counts {
        Some(counts) => format!("habit-day habit-day--level-{}", intensity_level(counts)),
        None => "habit-day habit-day--no-data".to_string(),
    };
    let label = match counts {
        Some(counts) => format!("{date}: {} de {} hábitos", counts.completed, counts.amount),
        None => format!("{date}: sem registros"),
    };

    habit_day_link(
        iso,
        rsx! {
            div { class: "{class}", role: "button", aria_label: "{label}" }
        },
    )
}

/// Inert trailing cell padding the grid to its minimum size.
#[component]
pub fn FillerDay() -> Element {
    rsx! {
        div { class: "habit-day habit-day--filler", aria_hidden: true }
    }
}

/// Rounded completion percentage; an empty schedule counts as 0%.
fn completion_percentage(counts: DayCounts) -> u32 {
    if counts.amount == 0 {
        return 0;
    }
    ((counts.completed as f64 / counts.amount as f64) * 100.0).round() as u32
}

/// Intensity step for a populated cell, 0 (nothing done) through 5 (≥80%).
/// The steps mirror the theme's `habit-day--level-*` classes.
fn intensity_level(counts: DayCounts) -> u8 {
    match completion_percentage(counts) {
        0 => 0,
        1..=19 => 1,
        20..=39 => 2,
        40..=59 => 3,
        60..=79 => 4,
        _ => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(amount: u32, completed: u32) -> DayCounts {
        DayCounts { amount, completed }
    }

    #[test]
    fn percentage_rounds_and_handles_empty_schedules() {
        assert_eq!(completion_percentage(counts(0, 0)), 0);
        assert_eq!(completion_percentage(counts(3, 1)), 33);
        assert_eq!(completion_percentage(counts(3, 2)), 67);
        assert_eq!(completion_percentage(counts(5, 5)), 100);
    }

    #[test]
    fn intensity_levels_follow_the_theme_buckets() {
        assert_eq!(intensity_level(counts(5, 0)), 0);
        assert_eq!(intensity_level(counts(10, 1)), 1);
        assert_eq!(intensity_level(counts(10, 2)), 2);
        assert_eq!(intensity_level(counts(10, 4)), 3);
        assert_eq!(intensity_level(counts(10, 6)), 4);
        assert_eq!(intensity_level(counts(10, 8)), 5);
        assert_eq!(intensity_level(counts(5, 5)), 5);
    }
}
