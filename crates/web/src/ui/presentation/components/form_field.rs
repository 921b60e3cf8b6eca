//! Labeled controlled input

use dioxus::prelude::*;

#[component]
pub fn FormField(
    label: &'static str,
    id: &'static str,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] placeholder: &'static str,
    #[props(default)] min: String,
    #[props(default)] autocomplete: &'static str,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            label {
                r#for: id,
                "{label}"
            }
            input {
                id: id,
                name: id,
                r#type: input_type,
                value: "{value}",
                placeholder: placeholder,
                min: "{min}",
                autocomplete: autocomplete,
                required: required,
                disabled: disabled,
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}
