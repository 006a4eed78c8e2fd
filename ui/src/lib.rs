//! Shared UI crate for Habitos. Cross-platform views and the year-grid
//! presentation logic live here; launchers own the route table.

pub mod core;
pub mod views;

pub mod components {
    // Platform-registered navigation builder (components/nav.rs)
    pub mod nav;
    pub use nav::register_nav;
    pub use nav::NavBuilder;

    pub mod alert;
    pub use alert::AlertDialog;

    pub mod habit_day;
    pub use habit_day::{FillerDay, HabitDay};

    pub mod header;
    pub use header::Header;

    pub mod loading;
    pub use loading::Loading;
}
