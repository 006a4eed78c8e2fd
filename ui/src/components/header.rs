use dioxus::prelude::*;

/// Brand header above the year grid.
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "header",
            span { class: "header__logo", "há" }
            span { class: "header__logo header__logo--accent", "bits" }
        }
    }
}
