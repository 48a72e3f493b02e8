//=============================================================================
// File: src/screens/converter.rs
//=============================================================================
use crate::components::amount_input::AmountInput;
use crate::components::conversion_result::ConversionResultLine;
use crate::components::currency_select::CurrencySelect;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::converter_state::ConverterAction;
use crate::converter_view::ConverterView;
use crate::hooks::use_converter::use_converter;
use api::currency::Currency;
use api::prefs::ConverterPrefs;
use dioxus::prelude::*;

#[component]
pub fn ConverterScreen() -> Element {
    let prefs = use_context::<ConverterPrefs>();
    let mut converter = use_converter(&prefs);

    let view = ConverterView::from(&*converter.state().read());
    let disabled = view.controls_disabled;

    rsx! {
        Card {
            h1 {
                class: "converter-title",
                "Currency Converter"
            }
            Grid {
                AmountInput {
                    value: view.amount_text,
                    disabled,
                    on_input: move |text: String| converter.dispatch(ConverterAction::SetAmount(text)),
                }
                CurrencySelect {
                    id: "from-currency",
                    label: "From",
                    value: view.from,
                    disabled,
                    on_change: move |currency: Currency| converter.dispatch(ConverterAction::SetFrom(currency)),
                }
                CurrencySelect {
                    id: "to-currency",
                    label: "To",
                    value: view.to,
                    disabled,
                    on_change: move |currency: Currency| converter.dispatch(ConverterAction::SetTo(currency)),
                }
            }
            ConversionResultLine {
                text: view.result_line,
            }
            Button {
                disabled,
                busy: disabled,
                on_click: move |_| converter.dispatch(ConverterAction::Commit),
                "{view.button_label}"
            }
        }
    }
}
