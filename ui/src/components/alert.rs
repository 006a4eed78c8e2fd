use dioxus::prelude::*;

/// Blocking modal alert with a single acknowledgement action. The backdrop
/// swallows interaction with the screen underneath until "OK" is pressed.
#[component]
pub fn AlertDialog(title: String, message: String, on_acknowledge: EventHandler<()>) -> Element {
    rsx! {
        div { class: "alert__backdrop",
            div { class: "alert", role: "alertdialog", aria_label: "{title}",
                h2 { class: "alert__title", "{title}" }
                p { class: "alert__message", "{message}" }
                button {
                    r#type: "button",
                    class: "alert__action",
                    autofocus: true,
                    onclick: move |_| on_acknowledge.call(()),
                    "OK"
                }
            }
        }
    }
}
