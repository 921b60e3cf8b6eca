//! Toast stack

use dioxus::prelude::*;

use crate::ui::presentation::state::use_toast_state;

/// Renders every active toast; a click dismisses one early
#[component]
pub fn ToastHost() -> Element {
    let toast_state = use_toast_state();
    let toasts = toast_state.toasts.read().clone();

    rsx! {
        div {
            class: "toast-host",
            role: "status",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: toast.kind.css_class(),
                    onclick: move |_| {
                        let mut state = toast_state;
                        state.dismiss(toast.id);
                    },
                    "{toast.message}"
                }
            }
        }
    }
}
