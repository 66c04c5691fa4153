//! Client side checks of request parameters.

use common_utils::errors::{CustomResult, ValidationError};

/// Checks the constraints documented for a set of request parameters, so that a request bound
/// to be rejected is never sent.
pub trait Validate {
    fn validate(&self) -> CustomResult<(), ValidationError>;
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> CustomResult<(), ValidationError> {
        self.as_ref().map_or(Ok(()), Validate::validate)
    }
}

impl<T: Validate> Validate for [T] {
    fn validate(&self) -> CustomResult<(), ValidationError> {
        self.iter().try_for_each(Validate::validate)
    }
}

/// Implements [`Validate`] for parameters without constraints of their own.
macro_rules! unconstrained {
    ($($params:ty),+ $(,)?) => {
        $(
            impl $crate::validate::Validate for $params {
                fn validate(
                    &self,
                ) -> common_utils::errors::CustomResult<(), common_utils::errors::ValidationError>
                {
                    Ok(())
                }
            }
        )+
    };
}
pub(crate) use unconstrained;
