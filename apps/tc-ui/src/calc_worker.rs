use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::thread::{self, JoinHandle};
use tc_api::{ApiError, ApiResult, CalculationRequest, CalculationResponse, CalculationService};

/// One calculation running on a background thread.
pub struct CalcWorker {
    outcome_rx: Receiver<ApiResult<CalculationResponse>>,
    _handle: JoinHandle<()>,
}

impl CalcWorker {
    pub fn start<S>(service: S, request: CalculationRequest) -> Self
    where
        S: CalculationService + 'static,
    {
        let (tx, rx) = channel();
        let handle = thread::spawn(move || {
            let outcome = service.calculate(&request);
            let _ = tx.send(outcome);
        });

        Self {
            outcome_rx: rx,
            _handle: handle,
        }
    }

    /// The outcome once the call has finished, without blocking.
    pub fn poll(&self) -> Option<ApiResult<CalculationResponse>> {
        match self.outcome_rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(ApiError::Transport {
                message: "Calculation worker stopped unexpectedly".to_string(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};
    use tc_core::{Property, Substance};

    struct Fixed;

    impl CalculationService for Fixed {
        fn calculate(&self, _request: &CalculationRequest) -> ApiResult<CalculationResponse> {
            Ok(CalculationResponse::Failure {
                message: Some("Out of range".into()),
            })
        }
    }

    struct Panicking;

    impl CalculationService for Panicking {
        fn calculate(&self, _request: &CalculationRequest) -> ApiResult<CalculationResponse> {
            panic!("service blew up");
        }
    }

    fn request() -> CalculationRequest {
        CalculationRequest {
            substance: Substance::Propane,
            first_property: Property::Pressure,
            first_value: 10.0,
            second_property: Property::Entropy,
            second_value: 2.0,
        }
    }

    fn wait(worker: &CalcWorker) -> ApiResult<CalculationResponse> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(outcome) = worker.poll() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "worker did not finish");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn outcome_arrives_over_channel() {
        let worker = CalcWorker::start(Fixed, request());
        assert_eq!(
            wait(&worker),
            Ok(CalculationResponse::Failure {
                message: Some("Out of range".into())
            })
        );
    }

    #[test]
    fn dead_worker_reports_transport_error() {
        let worker = CalcWorker::start(Panicking, request());
        assert!(matches!(wait(&worker), Err(ApiError::Transport { .. })));
    }
}
