use crate::converter_state::ConverterAction;
use crate::converter_state::ConverterState;
use crate::converter_state::FetchTicket;
use api::prefs::ConverterPrefs;
use api::rate_providers::frankfurter::Frankfurter;
use dioxus::prelude::*;
use dioxus_logger::tracing;

/// Handle to the converter's reactive state.
///
/// All mutations go through [`Converter::dispatch`], which applies the reducer
/// and spawns the fetch it asks for. Fetch tasks belong to the calling
/// component's scope and are dropped with it.
#[derive(Clone, Copy)]
pub struct Converter {
    state: Signal<ConverterState>,
    provider: Signal<Frankfurter>,
}

impl Converter {
    /// Returns the state signal.
    /// Call .read() on this in a component to subscribe to changes.
    pub fn state(&self) -> Signal<ConverterState> {
        self.state
    }

    /// Applies `action` unless the form is locked by an in-flight fetch.
    pub fn dispatch(&mut self, action: ConverterAction) {
        if !self.state.peek().admits(&action) {
            tracing::debug!("dropping {:?} while a conversion is in flight", action);
            return;
        }

        if action.is_commit() {
            tracing::info!("commit {:?}", self.state.peek().pending().to_request());
        }

        let ticket = self.state.write().update(action);
        if let Some(ticket) = ticket {
            self.issue(ticket);
        }
    }

    fn mount(&mut self) {
        let ticket = self.state.write().mount();
        if let Some(ticket) = ticket {
            self.issue(ticket);
        }
    }

    fn issue(&self, ticket: FetchTicket) {
        tracing::debug!("conversion #{} for {:?}", ticket.generation, ticket.request);
        let provider = self.provider.peek().clone();
        let mut converter = *self;
        spawn(async move {
            let finished = ticket.run(&provider).await;
            converter.dispatch(finished);
        });
    }
}

/// Creates the converter state for the calling component and starts the
/// initial conversion once mounted.
pub fn use_converter(prefs: &ConverterPrefs) -> Converter {
    let initial = prefs.initial_request();
    let base_url = prefs.api_base_url().to_string();

    let state = use_signal(move || ConverterState::new(initial));
    let provider = use_signal(move || Frankfurter::new(base_url));
    let mut converter = Converter { state, provider };

    // Only writes the signal, so this never re-runs.
    use_effect(move || converter.mount());

    converter
}
