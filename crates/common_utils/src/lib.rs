#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unreachable,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod consts;
pub mod errors;
pub mod ext_traits;
pub mod fp_utils;
pub mod pii;
pub mod request;
pub mod validation;

/// Generate a random UUID (v4), hyphenated.
#[inline]
pub fn generate_uuid_v4() -> String {
    uuid::Uuid::new_v4().as_hyphenated().to_string()
}
