//! Shared application layer for thermocalc.
//!
//! This crate provides the form state machine and controller used by both
//! the CLI and the desktop UI, plus configuration loading and result
//! rendering.

pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod render;

// Re-export key types for convenience
pub use config::{AppConfig, load_config, resolve_client_config};
pub use controller::FormController;
pub use error::{AppError, AppResult};
pub use form::{
    CALCULATION_FAILED, Effect, FormEvent, FormState, MISSING_FIELDS, REQUEST_FAILED, Transition,
    transition,
};
pub use render::{format_value, render_result};
