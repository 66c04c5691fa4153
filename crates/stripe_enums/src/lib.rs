#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod enums;
pub mod merchant_category;

pub use self::{enums::*, merchant_category::MerchantCategory};
