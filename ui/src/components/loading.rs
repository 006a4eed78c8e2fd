use dioxus::prelude::*;

/// Full-screen spinner shown while the summary fetch is in flight.
#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading", role: "status", aria_label: "Carregando",
            div { class: "loading__spinner" }
        }
    }
}
