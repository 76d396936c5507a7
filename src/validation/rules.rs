//! Input rules that accumulate every failure.
//!
//! Each rule returns a [`Checked`] value. Rules are combined with [`zip`],
//! which keeps evaluating after a failure and merges the error lists, so a
//! caller always sees every broken rule from one pass.

use crate::core::{Direction, Rotation};
use crate::validation::errors::{Axis, Dimension, ValidationError, ValidationErrors};
use stillwater::validation::Validation;
use stillwater::{NonEmptyVec, Semigroup};

/// Outcome of one or more rules.
pub type Checked<T> = Validation<T, NonEmptyVec<ValidationError>>;

/// Combine two rule outcomes, keeping the failures of both.
pub fn zip<A, B>(a: Checked<A>, b: Checked<B>) -> Checked<(A, B)> {
    match (a, b) {
        (Validation::Success(a), Validation::Success(b)) => Validation::success((a, b)),
        (Validation::Failure(errors), Validation::Success(_))
        | (Validation::Success(_), Validation::Failure(errors)) => Validation::Failure(errors),
        (Validation::Failure(first), Validation::Failure(second)) => {
            Validation::Failure(first.combine(second))
        }
    }
}

/// Convert a rule outcome into the public `Result` shape.
///
/// # Errors
///
/// Returns every accumulated failure.
pub fn finish<T>(checked: Checked<T>) -> Result<T, ValidationErrors> {
    match checked {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => Err(errors.into()),
    }
}

/// A coordinate must be a non-zero integer.
pub fn coordinate(axis: Axis, raw: Option<&str>) -> Checked<i64> {
    let input = raw.unwrap_or_default().trim();
    match input.parse::<i64>() {
        Ok(0) => Validation::fail(ValidationError::CoordinateZero { axis }),
        Ok(value) => Validation::success(value),
        Err(_) => Validation::fail(ValidationError::CoordinateNotANumber {
            axis,
            input: input.to_string(),
        }),
    }
}

/// A coordinate must lie in `1..=limit`. Zero gets its own message.
pub fn within(axis: Axis, value: i64, limit: i64) -> Checked<i64> {
    if value == 0 {
        Validation::fail(ValidationError::CoordinateZero { axis })
    } else if (1..=limit).contains(&value) {
        Validation::success(value)
    } else {
        Validation::fail(ValidationError::CoordinateOutOfBounds { axis, value, limit })
    }
}

/// A coordinate must be a non-zero integer inside `1..=limit`.
///
/// Zero is reported once, as zero, rather than also as out of bounds.
pub fn coordinate_within(axis: Axis, raw: Option<&str>, limit: i64) -> Checked<i64> {
    match coordinate(axis, raw) {
        Validation::Success(value) => within(axis, value, limit),
        failure => failure,
    }
}

/// An optional direction; absent means "keep facing the current way".
pub fn direction(raw: Option<&str>) -> Checked<Option<Direction>> {
    match raw.map(Direction::parse) {
        None => Validation::success(None),
        Some(Ok(direction)) => Validation::success(Some(direction)),
        Some(Err(error)) => Validation::fail(error),
    }
}

/// A rotation must be `LEFT` or `RIGHT`.
pub fn rotation(raw: Option<&str>) -> Checked<Rotation> {
    match Rotation::parse(raw.unwrap_or_default()) {
        Ok(rotation) => Validation::success(rotation),
        Err(error) => Validation::fail(error),
    }
}

/// A grid dimension must be a positive integer.
pub fn dimension(dimension: Dimension, raw: &str) -> Checked<i64> {
    let input = raw.trim();
    match input.parse::<i64>() {
        Ok(value) if value >= 1 => Validation::success(value),
        _ => Validation::fail(ValidationError::InvalidDimension {
            dimension,
            input: input.to_string(),
        }),
    }
}

/// Width then height, both checked.
pub fn dimensions(width: &str, height: &str) -> Checked<(i64, i64)> {
    zip(
        dimension(Dimension::Width, width),
        dimension(Dimension::Height, height),
    )
}
