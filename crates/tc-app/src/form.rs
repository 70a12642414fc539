//! Form state machine.
//!
//! Every change to the form goes through [`transition`], a pure function of
//! the current state and one event. Submitting does not perform I/O here:
//! the transition hands back an [`Effect::Calculate`] and the caller feeds
//! the outcome back in as [`FormEvent::CalculationFinished`].

use tc_api::{ApiResult, CalculationRequest, CalculationResponse, CalculationResult};
use tc_core::{Property, Substance, available_second_properties, is_blank, parse_value};
use tracing::debug;

/// Shown when submission is attempted with an empty field.
pub const MISSING_FIELDS: &str = "Please fill in all fields";
/// Shown when the service reports an error without a message.
pub const CALCULATION_FAILED: &str = "Calculation failed";
/// Shown when the request itself failed without a usable message.
pub const REQUEST_FAILED: &str = "Failed to calculate properties";

/// Everything the user has entered plus the outcome of the last submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub substance: Option<Substance>,
    pub first_property: Option<Property>,
    /// Raw text; parsed only on submission
    pub first_value: String,
    pub second_property: Option<Property>,
    /// Raw text; parsed only on submission
    pub second_value: String,
    pub loading: bool,
    pub error: Option<String>,
    pub results: Option<CalculationResult>,
}

impl FormState {
    /// Options for the second property: all properties except the first.
    pub fn available_second_properties(&self) -> Vec<Property> {
        available_second_properties(self.first_property)
    }

    /// The second property selector is usable once a first property is set.
    pub fn second_property_enabled(&self) -> bool {
        self.first_property.is_some()
    }

    /// The second value field is presented only once a second property is chosen.
    pub fn shows_second_value(&self) -> bool {
        self.second_property.is_some()
    }

    /// All five required fields hold something.
    pub fn is_complete(&self) -> bool {
        self.substance.is_some()
            && self.first_property.is_some()
            && !is_blank(&self.first_value)
            && self.second_property.is_some()
            && !is_blank(&self.second_value)
    }

    /// Mirrors the submit button: enabled when idle and complete.
    pub fn can_submit(&self) -> bool {
        !self.loading && self.is_complete()
    }

    /// Validate the fields and build the request body.
    ///
    /// Returns the message to show on the form when validation fails.
    pub fn build_request(&self) -> Result<CalculationRequest, String> {
        let (Some(substance), Some(first_property), Some(second_property)) =
            (self.substance, self.first_property, self.second_property)
        else {
            return Err(MISSING_FIELDS.to_string());
        };
        if is_blank(&self.first_value) || is_blank(&self.second_value) {
            return Err(MISSING_FIELDS.to_string());
        }

        let first_value = parse_value(&self.first_value, "First value").map_err(|e| e.to_string())?;
        let second_value =
            parse_value(&self.second_value, "Second value").map_err(|e| e.to_string())?;

        Ok(CalculationRequest {
            substance,
            first_property,
            first_value,
            second_property,
            second_value,
        })
    }
}

/// User input or submission progress.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    SubstanceSelected(Option<Substance>),
    FirstPropertySelected(Option<Property>),
    FirstValueChanged(String),
    SecondPropertySelected(Option<Property>),
    SecondValueChanged(String),
    SubmitRequested,
    CalculationFinished(ApiResult<CalculationResponse>),
}

/// Work the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send this request to the calculation service.
    Calculate(CalculationRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: FormState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn to(state: FormState) -> Self {
        Self {
            state,
            effect: None,
        }
    }
}

/// Apply one event to the form.
pub fn transition(mut state: FormState, event: FormEvent) -> Transition {
    match event {
        FormEvent::SubstanceSelected(substance) => {
            state.substance = substance;
            state.error = None;
        }
        FormEvent::FirstPropertySelected(property) => {
            if matches!(property, Some(p) if !p.is_first_choice()) {
                debug!(?property, "first property selection blocked");
                return Transition::to(state);
            }
            state.first_property = property;
            state.second_property = None;
            state.error = None;
        }
        FormEvent::FirstValueChanged(text) => {
            state.first_value = text;
            state.error = None;
        }
        FormEvent::SecondPropertySelected(property) => {
            if !state.second_property_enabled() {
                debug!(?property, "second property selection blocked: no first property");
                return Transition::to(state);
            }
            if matches!(property, Some(p) if !state.available_second_properties().contains(&p)) {
                debug!(?property, "second property selection blocked: same as first");
                return Transition::to(state);
            }
            state.second_property = property;
            state.error = None;
        }
        FormEvent::SecondValueChanged(text) => {
            state.second_value = text;
            state.error = None;
        }
        FormEvent::SubmitRequested => return submit(state),
        FormEvent::CalculationFinished(outcome) => finish(&mut state, outcome),
    }
    Transition::to(state)
}

fn submit(mut state: FormState) -> Transition {
    match state.build_request() {
        Ok(_) if state.loading => {
            debug!("submission ignored: a calculation is already in flight");
            Transition::to(state)
        }
        Ok(request) => {
            state.loading = true;
            state.error = None;
            Transition {
                state,
                effect: Some(Effect::Calculate(request)),
            }
        }
        Err(message) => {
            state.error = Some(message);
            Transition::to(state)
        }
    }
}

fn finish(state: &mut FormState, outcome: ApiResult<CalculationResponse>) {
    state.loading = false;
    match outcome {
        Ok(CalculationResponse::Success(result)) => {
            state.results = Some(result);
            state.error = None;
        }
        Ok(CalculationResponse::Failure { message }) => {
            let message = message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| CALCULATION_FAILED.to_string());
            state.error = Some(message);
            state.results = None;
        }
        Err(err) => {
            let message = err.to_string();
            state.error = Some(if message.is_empty() {
                REQUEST_FAILED.to_string()
            } else {
                message
            });
            state.results = None;
        }
    }
}
