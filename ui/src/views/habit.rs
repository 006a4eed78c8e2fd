use dioxus::prelude::*;
use time::macros::format_description;

use crate::core::dates::parse_calendar_day;

const WEEKDAY_NAMES: [&str; 7] = [
    "domingo",
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
];

/// Detail screen for a single day, reached from a year-grid cell. `date` is
/// the midnight-UTC ISO-8601 serialization the cell link carries; only its
/// calendar-day component matters here.
#[component]
pub fn Habit(date: String) -> Element {
    let day = parse_calendar_day(&date);

    let weekday = day.map(|day| WEEKDAY_NAMES[day.weekday().number_days_from_sunday() as usize]);
    let heading = day
        .and_then(|day| day.format(&format_description!("[day]/[month]")).ok())
        .unwrap_or_else(|| date.clone());

    rsx! {
        section { class: "page page-habit",
            if let Some(weekday) = weekday {
                span { class: "page-habit__weekday", "{weekday}" }
            }
            h1 { class: "page-habit__date", "{heading}" }

            if day.is_some() {
                p { class: "page-habit__placeholder",
                    "Os hábitos deste dia aparecerão aqui."
                }
            } else {
                p { class: "page-habit__placeholder", "Data inválida." }
            }
        }
    }
}
