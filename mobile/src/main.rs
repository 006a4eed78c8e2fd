use dioxus::prelude::*;

use api::SummaryClient;
use ui::components::nav::{register_nav, NavBuilder};
use ui::views::{Habit, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/habit/:date")]
    Habit { date: String },
}

// Shared theme embedded from ui/assets/theme/main.css; no per-platform copy.
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_habit_day(date: String, body: Element) -> Element {
    rsx!(Link {
        class: "habit-day__link",
        to: Route::Habit { date },
        {body}
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        habit_day: nav_habit_day,
    });
    // On a device "localhost" is the phone itself, so point HABITOS_API_URL
    // at the machine running the backend when testing.
    use_context_provider(|| {
        SummaryClient::new(option_env!("HABITOS_API_URL").unwrap_or(api::DEFAULT_BASE_URL))
    });

    rsx! {
        document::Style { "{THEME_CSS_INLINE}" }

        Router::<Route> {}
    }
}
