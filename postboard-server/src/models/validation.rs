//! Validation error types

use std::fmt;

/// Validation error for request inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A single required field is absent or empty
    Missing { field: &'static str },

    /// Several required fields are absent or empty
    MissingFields { fields: Vec<&'static str> },
}

impl ValidationError {
    /// Join two failures into one error naming the fields of both
    pub fn and(self, other: Self) -> Self {
        let mut fields = self.fields();
        fields.extend(other.fields());
        Self::MissingFields { fields }
    }

    /// Names of the offending fields
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            Self::Missing { field } => vec![*field],
            Self::MissingFields { fields } => fields.clone(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "missing required fields: {}", field),
            Self::MissingFields { fields } => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Pair two field results, keeping every failure when both fail
pub fn both<A, B>(
    a: Result<A, ValidationError>,
    b: Result<B, ValidationError>,
) -> Result<(A, B), ValidationError> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(x), Err(y)) => Err(x.and(y)),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
    }
}
