//! Error types for the calculator library

use thiserror::Error;

/// Errors raised at the library boundary
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied a value outside the documented preconditions
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A rate or allocation table is missing a band or breaks its invariants
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reject negative or non-finite amounts
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::InvalidInput(format!("{name} must be a finite number, got {value}")));
    }
    if value < 0.0 {
        return Err(Error::InvalidInput(format!("{name} must not be negative, got {value}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_non_negative() {
        assert!(ensure_non_negative("wages", 0.0).is_ok());
        assert!(ensure_non_negative("wages", 6000.0).is_ok());
        assert!(matches!(ensure_non_negative("wages", -1.0), Err(Error::InvalidInput(_))));
        assert!(matches!(ensure_non_negative("wages", f64::NAN), Err(Error::InvalidInput(_))));
        assert!(matches!(ensure_non_negative("wages", f64::INFINITY), Err(Error::InvalidInput(_))));
    }
}
