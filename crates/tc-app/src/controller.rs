//! Form controller: owns the form state and drives submissions through a
//! [`CalculationService`].

use tc_api::{ApiResult, CalculationRequest, CalculationResponse, CalculationService};
use tc_core::{Property, Substance};
use tracing::info;

use crate::form::{Effect, FormEvent, FormState, transition};

pub struct FormController<S> {
    state: FormState,
    service: S,
}

impl<S: CalculationService> FormController<S> {
    pub fn new(service: S) -> Self {
        Self::with_state(service, FormState::default())
    }

    pub fn with_state(service: S, state: FormState) -> Self {
        Self { state, service }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Apply an event and return the effect the caller must run, if any.
    pub fn dispatch(&mut self, event: FormEvent) -> Option<Effect> {
        let current = std::mem::take(&mut self.state);
        let next = transition(current, event);
        self.state = next.state;
        next.effect
    }

    pub fn set_substance(&mut self, substance: Option<Substance>) {
        self.dispatch(FormEvent::SubstanceSelected(substance));
    }

    pub fn set_first_property(&mut self, property: Option<Property>) {
        self.dispatch(FormEvent::FirstPropertySelected(property));
    }

    pub fn set_first_value(&mut self, text: impl Into<String>) {
        self.dispatch(FormEvent::FirstValueChanged(text.into()));
    }

    pub fn set_second_property(&mut self, property: Option<Property>) {
        self.dispatch(FormEvent::SecondPropertySelected(property));
    }

    pub fn set_second_value(&mut self, text: impl Into<String>) {
        self.dispatch(FormEvent::SecondValueChanged(text.into()));
    }

    pub fn available_second_properties(&self) -> Vec<Property> {
        self.state.available_second_properties()
    }

    /// Validate and mark the form as loading.
    ///
    /// Returns the request to send, or `None` when validation failed (the
    /// message is on the state) or a calculation is already in flight.
    pub fn begin_submit(&mut self) -> Option<CalculationRequest> {
        match self.dispatch(FormEvent::SubmitRequested) {
            Some(Effect::Calculate(request)) => Some(request),
            None => None,
        }
    }

    /// Record the outcome of a request started with [`begin_submit`](Self::begin_submit).
    pub fn finish_submit(&mut self, outcome: ApiResult<CalculationResponse>) {
        self.dispatch(FormEvent::CalculationFinished(outcome));
    }

    /// Submit the form and block until the service answers.
    pub fn submit(&mut self) -> &FormState {
        if let Some(request) = self.begin_submit() {
            info!(
                substance = request.substance.key(),
                first = request.first_property.key(),
                second = request.second_property.key(),
                "calculating"
            );
            let outcome = self.service.calculate(&request);
            self.finish_submit(outcome);
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tc_api::{ApiError, CalculationResult, CalculationStatus};

    use crate::form::MISSING_FIELDS;

    /// Replays a fixed outcome and records every request.
    struct Scripted {
        outcome: ApiResult<CalculationResponse>,
        seen: Mutex<Vec<CalculationRequest>>,
    }

    impl Scripted {
        fn new(outcome: ApiResult<CalculationResponse>) -> Self {
            Self {
                outcome,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    impl CalculationService for Scripted {
        fn calculate(&self, request: &CalculationRequest) -> ApiResult<CalculationResponse> {
            self.seen.lock().unwrap().push(*request);
            self.outcome.clone()
        }
    }

    fn success() -> CalculationResponse {
        CalculationResponse::Success(CalculationResult {
            status: CalculationStatus::Success,
            state: "Superheated Vapor".into(),
            details: "T = 20 °C".into(),
            saturation_properties: None,
        })
    }

    fn fill<S: CalculationService>(controller: &mut FormController<S>) {
        controller.set_substance(Some(Substance::Water));
        controller.set_first_property(Some(Property::Pressure));
        controller.set_first_value("101.325");
        controller.set_second_property(Some(Property::Temperature));
        controller.set_second_value("100");
    }

    #[test]
    fn submit_calls_service_once_and_stores_result() {
        let service = Scripted::new(Ok(success()));
        let mut controller = FormController::new(&service);
        fill(&mut controller);

        let state = controller.submit();
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(
            state.results.as_ref().map(|r| r.state.as_str()),
            Some("Superheated Vapor")
        );

        let seen = service.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].first_value, 101.325);
        assert_eq!(seen[0].second_property, Property::Temperature);
    }

    #[test]
    fn missing_field_does_not_call_service() {
        let service = Scripted::new(Ok(success()));
        let mut controller = FormController::new(&service);
        fill(&mut controller);
        controller.set_second_value("");

        let state = controller.submit();
        assert_eq!(state.error.as_deref(), Some(MISSING_FIELDS));
        assert_eq!(service.calls(), 0);
    }

    #[test]
    fn transport_error_is_shown() {
        let service = Scripted::new(Err(ApiError::Transport {
            message: "connection refused".into(),
        }));
        let mut controller = FormController::new(&service);
        fill(&mut controller);

        let state = controller.submit();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("connection refused"));
        assert!(state.results.is_none());
    }

    #[test]
    fn begin_submit_twice_yields_one_request() {
        let service = Scripted::new(Ok(success()));
        let mut controller = FormController::new(&service);
        fill(&mut controller);

        assert!(controller.begin_submit().is_some());
        assert!(controller.state().loading);
        assert!(controller.begin_submit().is_none());

        controller.finish_submit(Ok(success()));
        assert!(!controller.state().loading);
        assert!(controller.state().results.is_some());
    }

    #[test]
    fn first_property_change_clears_second_selection() {
        let service = Scripted::new(Ok(success()));
        let mut controller = FormController::new(&service);
        fill(&mut controller);

        controller.set_first_property(Some(Property::Temperature));
        assert_eq!(controller.state().second_property, None);
        assert!(!controller.available_second_properties().contains(&Property::Temperature));
    }
}
