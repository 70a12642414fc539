//! Calculation service trait and its HTTP implementation.

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::schema::parse_response;
use crate::types::{CalculationRequest, CalculationResponse};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use std::sync::Arc;
use tracing::{debug, error};

/// Anything that can answer a calculation request.
///
/// Implementations must be thread-safe (Send + Sync) so front ends can run
/// the call on a worker thread.
pub trait CalculationService: Send + Sync {
    fn calculate(&self, request: &CalculationRequest) -> ApiResult<CalculationResponse>;
}

impl<T: CalculationService + ?Sized> CalculationService for &T {
    fn calculate(&self, request: &CalculationRequest) -> ApiResult<CalculationResponse> {
        (**self).calculate(request)
    }
}

impl<T: CalculationService + ?Sized> CalculationService for Arc<T> {
    fn calculate(&self, request: &CalculationRequest) -> ApiResult<CalculationResponse> {
        (**self).calculate(request)
    }
}

/// Blocking HTTP client for `POST {base_url}/calculate`.
///
/// One request per call: no retries, no backoff.
#[derive(Debug, Clone)]
pub struct HttpCalculationClient {
    config: ClientConfig,
    http: reqwest::blocking::Client,
}

impl HttpCalculationClient {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::InvalidConfig {
                message: e.to_string(),
            })?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn post(&self, url: &str, request: &CalculationRequest) -> ApiResult<CalculationResponse> {
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        parse_response(&body)
    }
}

impl CalculationService for HttpCalculationClient {
    fn calculate(&self, request: &CalculationRequest) -> ApiResult<CalculationResponse> {
        let url = self.config.calculate_url();
        debug!(
            %url,
            substance = request.substance.key(),
            first = request.first_property.key(),
            second = request.second_property.key(),
            "submitting calculation"
        );

        let result = self.post(&url, request);
        match &result {
            Ok(response) => debug!(status = ?response.status(), "calculation answered"),
            Err(err) => error!(error = %err, detail = ?err, "API Error"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting(AtomicUsize);

    impl CalculationService for Counting {
        fn calculate(&self, _request: &CalculationRequest) -> ApiResult<CalculationResponse> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(CalculationResponse::Failure { message: None })
        }
    }

    fn request() -> CalculationRequest {
        CalculationRequest {
            substance: tc_core::Substance::Ammonia,
            first_property: tc_core::Property::Temperature,
            first_value: 20.0,
            second_property: tc_core::Property::Enthalpy,
            second_value: 1500.0,
        }
    }

    #[test]
    fn shared_service_forwards_calls() {
        let service = Arc::new(Counting(AtomicUsize::new(0)));
        let as_dyn: Arc<dyn CalculationService> = service.clone();

        as_dyn.calculate(&request()).unwrap();
        (&*service).calculate(&request()).unwrap();

        assert_eq!(service.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn client_keeps_its_config() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9/api".into(),
            timeout_secs: Some(2),
        };
        let client = HttpCalculationClient::new(config.clone()).unwrap();
        assert_eq!(client.config(), &config);
    }
}
