use dioxus::prelude::*;

use api::SummaryClient;

use crate::components::{AlertDialog, FillerDay, HabitDay, Header, Loading};
use crate::core::dates;
use crate::core::grid::{ProgressGrid, WEEK_DAY_LABELS};
use crate::core::summary::SummaryIndex;

const FETCH_ERROR_TITLE: &str = "Erro";
const FETCH_ERROR_MESSAGE: &str = "Não foi possível carregar os dados";

/// Year-progress screen: one cell per day since January 1, colored by how
/// much of that day's habits were completed.
///
/// The summary is fetched once on mount. While it is in flight only the
/// loading indicator renders; afterwards the grid renders either populated
/// (fetch succeeded) or all-absent (fetch failed, plus one alert). Dropping
/// the screen drops the resource, aborting an in-flight request.
#[component]
pub fn Home() -> Element {
    let client = try_use_context::<SummaryClient>().unwrap_or_default();
    let mut alert_dismissed = use_signal(|| false);

    let summary = use_resource(move || {
        let client = client.clone();
        async move {
            match client.fetch_summary().await {
                Ok(entries) => Ok(entries),
                Err(err) => {
                    tracing::error!(error = %err, "failed to load habit summary");
                    Err(err)
                }
            }
        }
    });

    let state = summary.read();
    let Some(outcome) = state.as_ref() else {
        return rsx! { Loading {} };
    };

    let fetch_failed = outcome.is_err();
    let index = match outcome {
        Ok(entries) => SummaryIndex::from_entries(entries),
        Err(_) => SummaryIndex::default(),
    };

    // Recomputed every render so the range never goes stale across midnight.
    let grid = ProgressGrid::build(&dates::dates_from_year_start(dates::today()), &index);

    rsx! {
        div { class: "home",
            Header {}

            div { class: "home__week-days",
                for (position, label) in WEEK_DAY_LABELS.iter().enumerate() {
                    span { key: "{position}", class: "home__week-day", "{label}" }
                }
            }

            div { class: "home__scroll",
                div { class: "home__grid",
                    for cell in grid.cells.iter() {
                        HabitDay {
                            key: "{cell.date}",
                            date: cell.date,
                            counts: cell.counts,
                        }
                    }
                    for position in 0..grid.filler_count {
                        FillerDay { key: "filler-{position}" }
                    }
                }
            }

            if fetch_failed && !alert_dismissed() {
                AlertDialog {
                    title: "{FETCH_ERROR_TITLE}",
                    message: "{FETCH_ERROR_MESSAGE}",
                    on_acknowledge: move |_| alert_dismissed.set(true),
                }
            }
        }
    }
}
