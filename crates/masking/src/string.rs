//!
//! Parsing string secrets from `&str`.
//!

use alloc::{str::FromStr, string::String};
use core::convert::Infallible;

use crate::{Secret, Strategy, StrongSecret};

impl<M: Strategy<String>> FromStr for Secret<String, M> {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(value.into()))
    }
}

impl<M> FromStr for StrongSecret<String, M> {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(value.into()))
    }
}

impl<M: Strategy<String>> From<&str> for Secret<String, M> {
    fn from(value: &str) -> Self {
        Self::new(value.into())
    }
}
