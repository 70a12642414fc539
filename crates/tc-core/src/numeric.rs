use crate::TcError;

/// Floating point type used throughout the system
pub type Real = f64;

/// True when a raw input field holds nothing worth submitting.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Parse user-entered text into a finite number.
pub fn parse_value(text: &str, field: &'static str) -> Result<Real, TcError> {
    let value: Real = text
        .trim()
        .parse()
        .map_err(|_| TcError::InvalidNumber { field })?;
    ensure_finite(value, field)
}

pub fn ensure_finite(v: Real, field: &'static str) -> Result<Real, TcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TcError::NonFinite { field })
    }
}
