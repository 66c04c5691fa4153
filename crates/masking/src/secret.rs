//!
//! A value formatted through a masking strategy.
//!

use std::{fmt, marker::PhantomData};

use crate::{ExposeInterface, PeekInterface, Strategy, WithType};

///
/// Holds a `T` whose `Debug` output is produced by the strategy `M` rather than by `T`.
///
/// Serialization still writes the value itself, since that is what a request body needs.
/// Use [`crate::masked_serialize`] for anything that ends up in a log line.
///
/// ```
/// use masking::{PeekInterface, Secret, Strategy};
/// use std::fmt;
///
/// enum Initials {}
///
/// impl Strategy<String> for Initials {
///     fn fmt(value: &String, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         for word in value.split_whitespace() {
///             write!(f, "{}.", word.chars().next().unwrap_or('*'))?;
///         }
///         Ok(())
///     }
/// }
///
/// let name: Secret<String, Initials> = Secret::new("Jenny Rosen".into());
/// assert_eq!(format!("{name:?}"), "J.R.");
/// assert_eq!(name.peek(), "Jenny Rosen");
/// ```
///
pub struct Secret<T, M = WithType>
where
    M: Strategy<T>,
{
    value: T,
    strategy: PhantomData<M>,
}

impl<T, M: Strategy<T>> Secret<T, M> {
    /// Wrap `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            strategy: PhantomData,
        }
    }
}

impl<T, M: Strategy<T>> PeekInterface<T> for Secret<T, M> {
    fn peek(&self) -> &T {
        &self.value
    }
}

impl<T, M: Strategy<T>> ExposeInterface<T> for Secret<T, M> {
    fn expose(self) -> T {
        self.value
    }
}

impl<T, M: Strategy<T>> From<T> for Secret<T, M> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Clone, M: Strategy<T>> Clone for Secret<T, M> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: Default, M: Strategy<T>> Default for Secret<T, M> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: PartialEq, M: Strategy<T>> PartialEq for Secret<T, M> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, M: Strategy<T>> Eq for Secret<T, M> {}

impl<T, M: Strategy<T>> fmt::Debug for Secret<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        M::fmt(&self.value, f)
    }
}
