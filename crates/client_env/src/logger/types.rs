//! Types.

use serde::Deserialize;
use strum::{Display, EnumString};
pub use tracing::{
    field::{Field, Visit},
    Level, Value,
};

/// Category and tag of log event.
///
/// Don't hesitate to add your variant if it is missing here.
#[derive(Debug, Default, Deserialize, Clone, Display, EnumString)]
pub enum Tag {
    /// General.
    #[default]
    General,

    /// API: outgoing web request.
    ApiOutgoingRequest,
    /// API: response of an outgoing web request.
    ApiIncomingResponse,
    /// A failed request is about to be sent again.
    Retry,
    /// Another page of a list is being fetched.
    Pagination,
}

/// Operations the client performs against the API.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Dispute retrieve flow.
    DisputesRetrieve,
    /// Dispute update flow.
    DisputesUpdate,
    /// Dispute list flow.
    DisputesList,
    /// Dispute close flow.
    DisputesClose,
    /// Issuing cardholder create flow.
    CardholdersCreate,
    /// Issuing cardholder list flow.
    CardholdersList,
    /// Issuing cardholder retrieve flow.
    CardholdersRetrieve,
    /// Issuing cardholder update flow.
    CardholdersUpdate,
    /// Payment method create flow.
    PaymentMethodsCreate,
    /// Payment method list flow.
    PaymentMethodsList,
    /// Payment method retrieve flow.
    PaymentMethodsRetrieve,
    /// Payment method update flow.
    PaymentMethodsUpdate,
    /// Payment method attach flow.
    PaymentMethodsAttach,
    /// Payment method detach flow.
    PaymentMethodsDetach,
}
