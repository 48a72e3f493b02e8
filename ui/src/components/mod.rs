//! Building blocks of the converter screen: Pico.css wrappers and form controls.
pub mod amount_input;
pub mod conversion_result;
pub mod currency_select;
pub mod pico;
