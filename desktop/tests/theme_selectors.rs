#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The Rust components reference theme classes by string, so a rename in
`ui/assets/theme/main.css` never fails compilation — it just silently
unstyles the packaged build. This asserts every structural selector the
components rely on is still present. When intentionally renaming a class:

1. Update the component markup.
2. Adjust REQUIRED_SELECTORS accordingly.

A substring presence check is enough as an early warning; parsing the CSS
properly would buy little here.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Loading indicator
    ".loading {",
    ".loading__spinner",
    "@keyframes loading-spin",
    // Header
    ".header {",
    ".header__logo",
    ".header__logo--accent",
    // Year progress screen
    ".home {",
    ".home__week-days",
    ".home__week-day",
    ".home__scroll",
    ".home__grid",
    // Day cells (one selector per intensity level the components emit)
    ".habit-day {",
    ".habit-day__link",
    ".habit-day--no-data",
    ".habit-day--filler",
    ".habit-day--level-0",
    ".habit-day--level-1",
    ".habit-day--level-2",
    ".habit-day--level-3",
    ".habit-day--level-4",
    ".habit-day--level-5",
    // Blocking alert
    ".alert__backdrop",
    ".alert {",
    ".alert__title",
    ".alert__message",
    ".alert__action",
    // Habit detail page
    ".page-habit__weekday",
    ".page-habit__date",
    ".page-habit__placeholder",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 400px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn grid_uses_seven_columns() {
    // The weekday header row and the day grid must stay in lockstep.
    assert!(
        THEME_CSS.matches("repeat(7, var(--day-size))").count() >= 2,
        "Expected both .home__week-days and .home__grid to lay out 7 columns"
    );
}
