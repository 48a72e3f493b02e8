//! The converter's single state record and the reducer that drives it.
//!
//! The state machine is `Idle -> Loading -> Idle`. Every change of the
//! committed triple starts a new cycle with a fresh generation number. A fetch
//! completion only lands if its generation is the one currently loading, so a
//! slow, superseded request can never overwrite a newer result.

use api::amount::coerce_amount;
use api::amount::format_amount;
use api::conversion::ConversionRequest;
use api::conversion::ConversionResponse;
use api::conversion::MISSING_RATE_POLICY;
use api::currency::Currency;
use api::rate_providers::RateProvider;
use api::ApiError;
use dioxus_logger::tracing;

/// Form values as the user is editing them. No effect until committed.
#[derive(Clone, PartialEq, Debug)]
pub struct PendingForm {
    amount_text: String,
    amount: f64,
    pub from: Currency,
    pub to: Currency,
}

impl PendingForm {
    fn new(request: ConversionRequest) -> Self {
        Self {
            amount_text: format_amount(request.amount),
            amount: request.amount,
            from: request.from,
            to: request.to,
        }
    }

    /// The amount exactly as typed.
    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    /// The amount coerced from the typed text (empty or invalid text is `0`).
    pub fn amount(&self) -> f64 {
        self.amount
    }

    fn set_amount_text(&mut self, text: String) {
        self.amount = coerce_amount(&text);
        self.amount_text = text;
    }

    pub fn to_request(&self) -> ConversionRequest {
        ConversionRequest::new(self.amount, self.from, self.to)
    }
}

/// What the result line shows.
#[derive(Clone, Copy, PartialEq, Debug, Default, strum::EnumIs)]
pub enum ConversionResult {
    #[default]
    Unset,
    Converted(f64),
    Failed,
}

/// A fetch the view must perform, tagged with the cycle it belongs to.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FetchTicket {
    pub generation: u64,
    pub request: ConversionRequest,
}

impl FetchTicket {
    /// Performs the fetch and wraps the outcome into the action that reports it.
    pub async fn run<P: RateProvider>(self, provider: &P) -> ConverterAction {
        let outcome = provider.convert(&self.request).await;
        ConverterAction::FetchFinished {
            generation: self.generation,
            outcome,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default, strum::EnumIs)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading(FetchTicket),
}

#[derive(Debug, strum::EnumIs)]
pub enum ConverterAction {
    SetAmount(String),
    SetFrom(Currency),
    SetTo(Currency),
    Commit,
    FetchFinished {
        generation: u64,
        outcome: Result<ConversionResponse, ApiError>,
    },
}

#[derive(Clone, PartialEq, Debug)]
pub struct ConverterState {
    pending: PendingForm,
    committed: ConversionRequest,
    result: ConversionResult,
    phase: FetchPhase,
    generation: u64,
}

impl ConverterState {
    /// A freshly mounted converter: pending and committed both hold `initial`,
    /// nothing converted yet.
    pub fn new(initial: ConversionRequest) -> Self {
        Self {
            pending: PendingForm::new(initial),
            committed: initial,
            result: ConversionResult::Unset,
            phase: FetchPhase::Idle,
            generation: 0,
        }
    }

    pub fn pending(&self) -> &PendingForm {
        &self.pending
    }

    pub fn committed(&self) -> ConversionRequest {
        self.committed
    }

    pub fn result(&self) -> ConversionResult {
        self.result
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Admission control for the form: while a fetch is in flight only its
    /// completion is accepted.
    pub fn admits(&self, action: &ConverterAction) -> bool {
        !self.is_loading() || action.is_fetch_finished()
    }

    /// Runs the first conversion cycle for the initial committed triple.
    pub fn mount(&mut self) -> Option<FetchTicket> {
        self.begin_cycle()
    }

    /// Applies `action`. Returns the fetch to perform, if the action started one.
    pub fn update(&mut self, action: ConverterAction) -> Option<FetchTicket> {
        match action {
            ConverterAction::SetAmount(text) => {
                self.pending.set_amount_text(text);
                None
            }
            ConverterAction::SetFrom(currency) => {
                self.pending.from = currency;
                None
            }
            ConverterAction::SetTo(currency) => {
                self.pending.to = currency;
                None
            }
            ConverterAction::Commit => self.commit(),
            ConverterAction::FetchFinished {
                generation,
                outcome,
            } => {
                self.finish(generation, outcome);
                None
            }
        }
    }

    fn commit(&mut self) -> Option<FetchTicket> {
        let request = self.pending.to_request();
        if request == self.committed {
            tracing::debug!("commit without changes: {:?}", request);
            return None;
        }
        self.committed = request;
        self.begin_cycle()
    }

    fn begin_cycle(&mut self) -> Option<FetchTicket> {
        self.generation += 1;
        let request = self.committed;

        if request.is_identity() {
            self.result = ConversionResult::Converted(request.amount);
            self.phase = FetchPhase::Idle;
            return None;
        }

        let ticket = FetchTicket {
            generation: self.generation,
            request,
        };
        self.phase = FetchPhase::Loading(ticket);
        Some(ticket)
    }

    fn finish(&mut self, generation: u64, outcome: Result<ConversionResponse, ApiError>) {
        let ticket = match self.phase {
            FetchPhase::Loading(ticket) if ticket.generation == generation => ticket,
            _ => {
                tracing::debug!(
                    "discarding stale conversion #{} (current #{})",
                    generation,
                    self.generation
                );
                return;
            }
        };

        let converted = outcome.and_then(|resp| {
            resp.converted_amount(ticket.request.to, MISSING_RATE_POLICY)
                .map_err(ApiError::from)
        });

        self.result = match converted {
            Ok(value) => ConversionResult::Converted(value),
            Err(e) => {
                tracing::error!("conversion #{} failed: {:#}", generation, e);
                ConversionResult::Failed
            }
        };
        self.phase = FetchPhase::Idle;
    }
}
