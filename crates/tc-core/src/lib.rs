//! tc-core: stable foundation for thermocalc.
//!
//! Contains:
//! - substance (fluids the calculation service accepts)
//! - property (state properties and the property-pair rule)
//! - numeric (parsing of user-entered values)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod property;
pub mod substance;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TcError, TcResult};
pub use numeric::*;
pub use property::{Property, available_second_properties};
pub use substance::Substance;
