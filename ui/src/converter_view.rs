//! Everything the converter screen renders, derived from `ConverterState`.

use crate::converter_state::ConversionResult;
use crate::converter_state::ConverterState;
use api::amount::format_amount;
use api::currency::Currency;

pub const CONVERT_LABEL: &str = "CONVERT";
pub const CONVERTING_LABEL: &str = "CONVERTING...";
pub const ERROR_PLACEHOLDER: &str = "Conversion error";

#[derive(Clone, PartialEq, Debug)]
pub struct ConverterView {
    pub amount_text: String,
    pub from: Currency,
    pub to: Currency,
    pub result_line: String,
    pub button_label: &'static str,
    /// Applies to the amount input, both dropdowns and the button.
    pub controls_disabled: bool,
}

impl From<&ConverterState> for ConverterView {
    fn from(state: &ConverterState) -> Self {
        let loading = state.is_loading();
        Self {
            amount_text: state.pending().amount_text().to_string(),
            from: state.pending().from,
            to: state.pending().to,
            result_line: result_line(state.result(), state.committed().to),
            button_label: if loading { CONVERTING_LABEL } else { CONVERT_LABEL },
            controls_disabled: loading,
        }
    }
}

/// The converted value followed by the committed target code, e.g. "10.85 USD".
pub fn result_line(result: ConversionResult, currency: Currency) -> String {
    match result {
        ConversionResult::Unset => currency.code().to_string(),
        ConversionResult::Converted(value) => format!("{} {}", format_amount(value), currency),
        ConversionResult::Failed => format!("{} {}", ERROR_PLACEHOLDER, currency),
    }
}
