pub mod cardholders;
pub mod disputes;
pub mod payment_methods;

pub use self::{
    cardholders::{Cardholders, CardholdersResource},
    disputes::{Disputes, DisputesResource},
    payment_methods::{PaymentMethods, PaymentMethodsResource},
};
