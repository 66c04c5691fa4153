//!
//! A secret that is zeroed when dropped and compared in constant time.
//!

use std::{fmt, marker::PhantomData};

use subtle::ConstantTimeEq;

use crate::{PeekInterface, Strategy, WithType, ZeroizableSecret};

///
/// Like [`crate::Secret`], for credentials: the value is wiped from memory on drop and two
/// secrets are compared without short-circuiting.
///
/// There is no `ExposeInterface` impl, the value can only be borrowed.
///
pub struct StrongSecret<T: ZeroizableSecret, M = WithType> {
    value: T,
    strategy: PhantomData<M>,
}

impl<T: ZeroizableSecret, M> StrongSecret<T, M> {
    /// Wrap `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            strategy: PhantomData,
        }
    }
}

impl<T: ZeroizableSecret, M> PeekInterface<T> for StrongSecret<T, M> {
    fn peek(&self) -> &T {
        &self.value
    }
}

impl<T: ZeroizableSecret, M> From<T> for StrongSecret<T, M> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: ZeroizableSecret + Clone, M> Clone for StrongSecret<T, M> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: ZeroizableSecret + StrongEq, M> PartialEq for StrongSecret<T, M> {
    fn eq(&self, other: &Self) -> bool {
        self.value.strong_eq(&other.value)
    }
}

impl<T: ZeroizableSecret + StrongEq, M> Eq for StrongSecret<T, M> {}

impl<T: ZeroizableSecret, M: Strategy<T>> fmt::Debug for StrongSecret<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        M::fmt(&self.value, f)
    }
}

impl<T: ZeroizableSecret, M> Drop for StrongSecret<T, M> {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Equality that takes the same time however early two values differ.
pub trait StrongEq {
    /// Whether `self` and `other` are equal.
    fn strong_eq(&self, other: &Self) -> bool;
}

impl StrongEq for String {
    fn strong_eq(&self, other: &Self) -> bool {
        bool::from(self.as_bytes().ct_eq(other.as_bytes()))
    }
}
