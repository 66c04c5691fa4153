#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod common;
pub mod disputes;
pub mod issuing;
pub mod payment_methods;
pub mod validate;

pub use stripe_enums as enums;

pub use self::{
    common::{ApiList, Expandable, ListParams, Metadata, Object, RangeQuery},
    validate::Validate,
};
