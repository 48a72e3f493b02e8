use dioxus::prelude::*;

/// The converted amount and target code, announced politely to screen readers.
#[component]
pub fn ConversionResultLine(text: String) -> Element {
    rsx! {
        p {
            class: "conversion-result",
            "aria-live": "polite",
            "{text}"
        }
    }
}
