//! Custom validations for some shared types.

use error_stack::report;

use crate::{
    consts,
    errors::{CustomResult, ValidationError},
};

/// Checks that a page size lies within the range accepted by list endpoints.
pub fn validate_list_limit(limit: Option<u32>) -> CustomResult<(), ValidationError> {
    match limit {
        Some(limit) if !(consts::LIST_MIN_LIMIT..=consts::LIST_MAX_LIMIT).contains(&limit) => {
            Err(report!(ValidationError::OutOfRange {
                field_name: "limit",
                min: consts::LIST_MIN_LIMIT.into(),
                max: consts::LIST_MAX_LIMIT.into(),
            }))
        }
        _ => Ok(()),
    }
}

/// Checks that `value` lies within `min..=max`.
pub fn validate_range<T>(
    field_name: &'static str,
    value: T,
    min: T,
    max: T,
) -> CustomResult<(), ValidationError>
where
    T: PartialOrd + Into<i64> + Copy,
{
    if value < min || value > max {
        return Err(report!(ValidationError::OutOfRange {
            field_name,
            min: min.into(),
            max: max.into(),
        }));
    }

    Ok(())
}

/// Checks that `value` holds at most `max_length` characters.
pub fn validate_char_count(
    field_name: &str,
    value: &str,
    max_length: usize,
) -> CustomResult<(), ValidationError> {
    if value.chars().count() > max_length {
        return Err(report!(ValidationError::TooLong {
            field_name: field_name.to_string(),
            max_length,
        }));
    }

    Ok(())
}

/// Checks that an identifier used as a path segment is not blank.
pub fn validate_identifier(
    field_name: &'static str,
    id: &str,
) -> CustomResult<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(report!(ValidationError::IncorrectValueProvided { field_name }));
    }

    Ok(())
}
