//! tc-mock-service: a local stand-in for the calculation service.
//!
//! Serves `POST /api/calculate` with canned answers so the client and the
//! form can be exercised without the real backend. Used by the integration
//! tests (ephemeral port, background thread) and as the `tc-mock-service`
//! binary during development.

pub mod canned;
pub mod error;
pub mod server;

pub use canned::{ServiceRequest, canned_response, classify_state, handle_body};
pub use error::{MockError, MockResult};
pub use server::{MockBehavior, MockServer, routes, serve};
