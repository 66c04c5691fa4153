#![forbid(unsafe_code)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod client;
pub mod consts;
pub mod errors;
pub mod resources;
pub mod services;
pub mod settings;
pub mod types;

pub use stripe_models as models;

pub use self::{
    client::StripeClient,
    errors::{SettingsError, StripeClientError},
    settings::Settings,
    types::{RequestOptions, StripeError, StripeErrorResponse, StripeErrorType},
};
