// ui/src/components/currency_select.rs
#![allow(non_snake_case)]

use api::currency::Currency;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[derive(Props, PartialEq, Clone)]
pub struct CurrencySelectProps {
    /// Element id and form name, e.g. "from-currency".
    pub id: &'static str,
    pub label: &'static str,
    /// The currency currently selected.
    pub value: Currency,
    #[props(default = false)]
    pub disabled: bool,
    pub on_change: EventHandler<Currency>,
}

/// A dropdown listing every supported currency by code.
pub fn CurrencySelect(props: CurrencySelectProps) -> Element {
    rsx! {
        select {
            id: "{props.id}",
            name: "{props.id}",
            "aria-label": "{props.label}",
            disabled: props.disabled,
            onchange: move |event| {
                let raw = event.value();
                match Currency::from_str(&raw) {
                    Ok(currency) => props.on_change.call(currency),
                    Err(e) => tracing::warn!("ignoring unknown currency {:?}: {}", raw, e),
                }
            },
            for currency in Currency::iter() {
                option {
                    key: "{currency}",
                    value: "{currency}",
                    title: "{currency.name()}",
                    selected: currency == props.value,
                    "{currency}"
                }
            }
        }
    }
}
