use thiserror::Error;

pub type TcResult<T> = Result<T, TcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TcError {
    #[error("{field} must be a number")]
    InvalidNumber { field: &'static str },

    /// Parsed, but infinite or NaN
    #[error("{field} must be a number")]
    NonFinite { field: &'static str },

    #[error("Unknown substance: {input}")]
    UnknownSubstance { input: String },

    #[error("Unknown property: {input}")]
    UnknownProperty { input: String },
}
