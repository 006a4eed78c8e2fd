use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platform crates register how a day cell links to their detail route, so
/// this crate never needs to know each platform's `Route` enum.
///
/// Each launcher calls [`register_nav`] before rendering its root:
///
/// ```ignore
/// fn nav_habit_day(date: String, body: Element) -> Element {
///     rsx!(Link { class: "habit-day__link", to: Route::Habit { date }, {body} })
/// }
///
/// register_nav(NavBuilder { habit_day: nav_habit_day });
/// ```
pub struct NavBuilder {
    /// Wraps a day cell body in a link to the detail screen for `date`
    /// (midnight-UTC ISO-8601 serialization).
    pub habit_day: fn(date: String, body: Element) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Builds the registered detail link, or falls back to the bare body when no
/// platform registered a builder.
pub fn habit_day_link(date: String, body: Element) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.habit_day)(date, body),
        None => body,
    }
}
