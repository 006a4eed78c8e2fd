#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::dpi::LogicalSize, tao::window::WindowBuilder, Config};
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

#[cfg(feature = "desktop")]
fn main() {
    init_tracing();

    // Phone-shaped window; the layout is portrait-first.
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Hábitos – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(430.0, 860.0)),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_tracing();
    LaunchBuilder::server().launch(App);
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn nav_habit_day(date: String, body: Element) -> Element {
    rsx!(Link {
        class: "habit-day__link",
        to: Route::Habit { date },
        {body}
    })
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        habit_day: nav_habit_day,
    });
    use_context_provider(|| {
        SummaryClient::new(option_env!("HABITOS_API_URL").unwrap_or(api::DEFAULT_BASE_URL))
    });

    rsx! {
        document::Style { "{THEME_CSS_INLINE}" }

        Router::<Route> {}
    }
}
