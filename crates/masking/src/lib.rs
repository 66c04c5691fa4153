#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Wrappers that keep API keys, card numbers and cardholder data out of `Debug` output and logs.
//!

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub use zeroize::Zeroize as ZeroizableSecret;

mod abs;
mod maskable;
mod secret;
mod strategy;
mod strong_secret;

#[cfg(feature = "alloc")]
mod string;

#[cfg(feature = "serde")]
mod serde;

pub use abs::{ExposeInterface, PeekInterface};
pub use maskable::{Mask, Maskable};
pub use secret::Secret;
pub use strategy::{ApiKey, Strategy, WithType};
pub use strong_secret::{StrongEq, StrongSecret};

#[cfg(feature = "serde")]
pub use crate::serde::{masked_serialize, ErasedMaskSerialize, SerializableSecret};
