//! Validation errors and their aggregate.

use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Coordinate axis named in a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::Y => f.write_str("Y"),
        }
    }
}

/// Grid dimension named in a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    Width,
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => f.write_str("Width"),
            Self::Height => f.write_str("Height"),
        }
    }
}

/// A single rejected piece of user input.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValidationError {
    #[error("{axis}-coordinate must be a number")]
    CoordinateNotANumber { axis: Axis, input: String },

    #[error("{axis}-coordinate must be greater than 0")]
    CoordinateZero { axis: Axis },

    #[error("{axis}-coordinate must be between 1 and {limit}")]
    CoordinateOutOfBounds { axis: Axis, value: i64, limit: i64 },

    #[error("Direction must be in allowed list")]
    InvalidDirection { input: String },

    #[error("Rotation must be LEFT or RIGHT")]
    InvalidRotation { input: String },

    #[error("{dimension} must be greater than 0")]
    InvalidDimension { dimension: Dimension, input: String },

    #[error("Action not valid, try again.")]
    UnknownAction { keyword: String },
}

/// Every failure produced by one operation, in rule order.
///
/// Never empty when returned from a failed operation.
#[derive(Debug, Clone, Error, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[error("{}", joined(.0))]
pub struct ValidationErrors(Vec<ValidationError>);

fn joined(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl ValidationErrors {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Human-readable message for each failure.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl From<NonEmptyVec<ValidationError>> for ValidationErrors {
    fn from(errors: NonEmptyVec<ValidationError>) -> Self {
        errors.iter().cloned().collect()
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_axis() {
        let err = ValidationError::CoordinateZero { axis: Axis::Y };
        assert_eq!(err.to_string(), "Y-coordinate must be greater than 0");

        let err = ValidationError::CoordinateOutOfBounds {
            axis: Axis::X,
            value: 9,
            limit: 4,
        };
        assert_eq!(err.to_string(), "X-coordinate must be between 1 and 4");
    }

    #[test]
    fn aggregate_displays_one_message_per_line() {
        let errors: ValidationErrors = vec![
            ValidationError::CoordinateZero { axis: Axis::X },
            ValidationError::InvalidDirection {
                input: "UP".to_string(),
            },
        ]
        .into_iter()
        .collect();

        assert_eq!(
            errors.to_string(),
            "X-coordinate must be greater than 0\nDirection must be in allowed list"
        );
    }

    #[test]
    fn aggregate_is_a_std_error() {
        let errors = ValidationErrors::from(ValidationError::InvalidRotation {
            input: "UP".to_string(),
        });
        let boxed: Box<dyn std::error::Error> = Box::new(errors);
        assert_eq!(boxed.to_string(), "Rotation must be LEFT or RIGHT");
        assert!(boxed.source().is_none());
    }

    #[test]
    fn errors_serialize_with_kind_tag() {
        let errors = ValidationErrors::from(ValidationError::UnknownAction {
            keyword: "FOO".to_string(),
        });
        let json = serde_json::to_string(&errors).unwrap();
        assert!(json.contains("\"kind\":\"UnknownAction\""));

        let back: ValidationErrors = serde_json::from_str(&json).unwrap();
        assert_eq!(back, errors);
    }
}
