//!
//! Header values that are either shown as is or masked, decided when the header is built.
//!

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{ExposeInterface, PeekInterface, Secret};

/// A value that is masked in `Debug` output only when built through [`Mask::into_masked`].
#[derive(Clone, PartialEq, Eq)]
pub enum Maskable<T: Clone + Eq> {
    /// Formatted through [`Secret`].
    Masked(Secret<T>),
    /// Formatted as is.
    Normal(T),
}

impl<T: Clone + Eq> Maskable<T> {
    /// The value, whichever variant holds it.
    pub fn into_inner(self) -> T {
        match self {
            Self::Masked(secret) => secret.expose(),
            Self::Normal(value) => value,
        }
    }

    /// Whether `Debug` hides the value. Also marks the header as sensitive on the wire.
    pub fn is_masked(&self) -> bool {
        matches!(self, Self::Masked(_))
    }
}

impl<T: Clone + Eq + fmt::Debug> fmt::Debug for Maskable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Masked(secret) => fmt::Debug::fmt(secret, f),
            Self::Normal(value) => fmt::Debug::fmt(value, f),
        }
    }
}

// Headers are kept in a set.
impl<T: Clone + Eq + Hash> Hash for Maskable<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Masked(secret) => secret.peek().hash(state),
            Self::Normal(value) => value.hash(state),
        }
    }
}

impl<T: Clone + Eq> From<T> for Maskable<T> {
    fn from(value: T) -> Self {
        Self::Normal(value)
    }
}

impl From<&str> for Maskable<String> {
    fn from(value: &str) -> Self {
        Self::Normal(value.to_owned())
    }
}

/// Conversion into the masked variant of [`Maskable`].
pub trait Mask {
    /// The type held by the resulting [`Maskable`].
    type Output: Clone + Eq;

    /// Wrap `self` so that it is never formatted in clear.
    fn into_masked(self) -> Maskable<Self::Output>;
}

impl Mask for String {
    type Output = Self;

    fn into_masked(self) -> Maskable<Self> {
        Maskable::Masked(Secret::new(self))
    }
}
