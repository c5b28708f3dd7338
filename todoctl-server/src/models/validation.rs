//! Validation error types

use std::fmt;

/// Validation error for request parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is missing or blank
    Empty { field: &'static str },

    /// Field is present but can't be parsed (e.g. non-integer id)
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} is required", field),
            Self::InvalidFormat { field, reason } => write!(f, "invalid {}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Empty { field: "title" };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::InvalidFormat {
            field: "id",
            reason: "must be an integer",
        };
        assert_eq!(err.to_string(), "invalid id: must be an integer");
    }
}
