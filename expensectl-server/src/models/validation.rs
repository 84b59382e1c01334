//! Validation error types

use std::fmt;

/// Required-field check that an expense payload failed.
///
/// The HTTP layer never exposes which field failed; the detail is kept for
/// logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Text field is empty (or absent from the body)
    Empty { field: &'static str },

    /// Numeric field is zero (or absent from the body)
    Zero { field: &'static str },

    /// Collection field is null or absent
    Missing { field: &'static str },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } | Self::Zero { field } | Self::Missing { field } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::Zero { field } => write!(f, "{} cannot be zero", field),
            Self::Missing { field } => write!(f, "{} is required", field),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            ValidationError::Empty { field: "title" }.to_string(),
            "title cannot be empty"
        );
        assert_eq!(
            ValidationError::Zero { field: "amount" }.to_string(),
            "amount cannot be zero"
        );
        assert_eq!(
            ValidationError::Missing { field: "tags" }.to_string(),
            "tags is required"
        );
    }

    #[test]
    fn field_accessor() {
        assert_eq!(ValidationError::Missing { field: "tags" }.field(), "tags");
    }
}
