//! Issuing resources.

pub mod cardholders;
