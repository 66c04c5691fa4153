//!
//! The two ways of reaching a wrapped value.
//!

/// Borrow the value behind a wrapper, leaving it in place.
pub trait PeekInterface<S> {
    /// The wrapped value.
    fn peek(&self) -> &S;
}

/// Take the value out of a wrapper.
pub trait ExposeInterface<S> {
    /// The wrapped value, which from here on is formatted like any other.
    fn expose(self) -> S;
}
