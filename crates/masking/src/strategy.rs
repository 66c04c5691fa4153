//!
//! How a secret is written by `Debug`.
//!

use core::fmt;

/// Formats a secret of type `T` in place of its own `Debug` impl.
pub trait Strategy<T> {
    /// Writes the masked form of `value`.
    fn fmt(value: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Writes only the type name, as `*** alloc::string::String ***`.
#[derive(Debug)]
pub enum WithType {}

impl<T> Strategy<T> for WithType {
    fn fmt(_: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "*** {} ***", std::any::type_name::<T>())
    }
}

/// Secret API keys keep their mode prefix (`sk_test_`, `rk_live_`, ...) visible so that logs
/// still tell live and test credentials apart.
#[derive(Debug)]
pub enum ApiKey {}

impl<T> Strategy<T> for ApiKey
where
    T: AsRef<str>,
{
    fn fmt(value: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = value.as_ref();
        let prefix = key
            .match_indices('_')
            .nth(1)
            .and_then(|(index, _)| key.get(..=index));

        match prefix {
            Some(prefix) => write!(fmt, "{prefix}***"),
            None => fmt.write_str("*** api-key ***"),
        }
    }
}
