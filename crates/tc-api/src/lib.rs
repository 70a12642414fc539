//! tc-api: client for the remote thermodynamic calculation service.
//!
//! Provides:
//! - Wire types for the calculate request and response
//! - Schema validation of response bodies
//! - `CalculationService` trait, the seam the form controller talks to
//! - `HttpCalculationClient`, the reqwest-backed implementation
//!
//! # Example
//!
//! ```no_run
//! use tc_api::{CalculationRequest, CalculationService, ClientConfig, HttpCalculationClient};
//! use tc_core::{Property, Substance};
//!
//! let client = HttpCalculationClient::new(ClientConfig::default()).unwrap();
//! let request = CalculationRequest {
//!     substance: Substance::Water,
//!     first_property: Property::Pressure,
//!     first_value: 101.325,
//!     second_property: Property::Temperature,
//!     second_value: 100.0,
//! };
//! let response = client.calculate(&request).unwrap();
//! println!("{response:?}");
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod schema;
pub mod types;

pub use client::{CalculationService, HttpCalculationClient};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use schema::parse_response;
pub use types::{
    CalculationRequest, CalculationResponse, CalculationResult, CalculationStatus,
    SaturationProperties, SaturationProperty,
};
