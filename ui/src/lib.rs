// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
pub mod converter_state;
pub mod converter_view;
pub mod hooks;
mod screens;

use api::prefs::ConverterPrefs;
use components::pico::Container;
use screens::converter::ConverterScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let converter_css = r#"
    /* --- APP FRAME --- */
    .app-main-container {
        min-height: 100vh;
        display: flex;
        align-items: flex-start;
        padding-top: 2rem;
        background-color: var(--pico-muted-border-color);
    }

    .app-main-container > main.container {
        max-width: 48rem;
    }

    /* --- CONVERTER CARD --- */
    .converter-title {
        text-transform: uppercase;
        text-decoration: underline;
        color: var(--pico-del-color);
    }

    .conversion-result {
        font-size: 1.75rem;
        margin: 1rem 0;
        min-height: 2.5rem;
    }

    .amount-input {
        font-size: 1.25rem;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{converter_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let prefs = use_hook(|| {
        let prefs = ConverterPrefs::default();
        dioxus_logger::tracing::info!("prefs: {:#?}", prefs);
        prefs
    });

    // Shared with the converter screen.
    use_context_provider(|| prefs.clone());

    rsx! {
        div {
            class: "app-main-container",
            Container {
                ConverterScreen {}
            }
        }
    }
}
