// ui/src/components/amount_input.rs
use dioxus::prelude::*;

/// The free-text amount field.
///
/// Input is passed up untouched; coercion to a number happens in the state.
#[component]
pub fn AmountInput(value: String, disabled: bool, on_input: EventHandler<String>) -> Element {
    rsx! {
        input {
            r#type: "text",
            id: "amount",
            name: "amount",
            class: "amount-input",
            inputmode: "decimal",
            autocomplete: "off",
            "aria-label": "Amount",
            value: "{value}",
            disabled,
            oninput: move |event| on_input.call(event.value()),
        }
    }
}
