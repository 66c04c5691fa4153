//! Value objects shared by several resources.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Set of key-value pairs attached to an object. Sorted so that encoded requests are stable.
pub type Metadata = BTreeMap<String, String>;

/// A top level API object.
pub trait Object {
    /// Value of the `object` field.
    const OBJECT: &'static str;

    fn id(&self) -> Option<&str>;
}

/// A field holding either the ID of another object or, when requested through `expand`, the
/// object itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    Id(String),
    Object(Box<T>),
}

impl<T: Object> Expandable<T> {
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Id(id) => Some(id),
            Self::Object(object) => object.id(),
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn as_object(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Object(object) => Some(object),
        }
    }

    pub fn into_object(self) -> Option<T> {
        match self {
            Self::Id(_) => None,
            Self::Object(object) => Some(*object),
        }
    }
}

macro_rules! referenced_object {
    ($(#[$meta:meta])* $name:ident, $object:literal) => {
        $(#[$meta])*
        ///
        /// Only the identifying fields are typed, everything else is kept as returned.
        #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            pub id: String,
            #[serde(default)]
            pub object: Option<String>,
            #[serde(flatten)]
            pub fields: serde_json::Map<String, serde_json::Value>,
        }

        impl Object for $name {
            const OBJECT: &'static str = $object;

            fn id(&self) -> Option<&str> {
                Some(&self.id)
            }
        }
    };
}

referenced_object!(
    /// A charge made against a payment source.
    Charge,
    "charge"
);
referenced_object!(
    /// A payment intent, the lifecycle of a single payment.
    PaymentIntent,
    "payment_intent"
);
referenced_object!(
    /// A movement of funds on the account balance.
    BalanceTransaction,
    "balance_transaction"
);
referenced_object!(
    /// An uploaded file, such as dispute evidence or an identity document.
    File,
    "file"
);
referenced_object!(
    /// A customer of the account.
    Customer,
    "customer"
);

/// Filter on a numeric field, typically a unix timestamp: either an exact value or a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeQuery<T> {
    Exact(T),
    Bounds(RangeBounds<T>),
}

impl<T> RangeQuery<T> {
    pub fn exact(value: T) -> Self {
        Self::Exact(value)
    }

    pub fn gt(value: T) -> Self {
        Self::Bounds(RangeBounds {
            gt: Some(value),
            gte: None,
            lt: None,
            lte: None,
        })
    }

    pub fn gte(value: T) -> Self {
        Self::Bounds(RangeBounds {
            gt: None,
            gte: Some(value),
            lt: None,
            lte: None,
        })
    }

    pub fn lt(value: T) -> Self {
        Self::Bounds(RangeBounds {
            gt: None,
            gte: None,
            lt: Some(value),
            lte: None,
        })
    }

    pub fn lte(value: T) -> Self {
        Self::Bounds(RangeBounds {
            gt: None,
            gte: None,
            lt: None,
            lte: Some(value),
        })
    }

    /// Inclusive range `[from, to]`.
    pub fn between(from: T, to: T) -> Self {
        Self::Bounds(RangeBounds {
            gt: None,
            gte: Some(from),
            lt: None,
            lte: Some(to),
        })
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeBounds<T> {
    pub gt: Option<T>,
    pub gte: Option<T>,
    pub lt: Option<T>,
    pub lte: Option<T>,
}

/// One page of a list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiList<T> {
    pub object: String,
    pub data: Vec<T>,
    pub has_more: bool,
    pub url: String,
}

impl<T: Object> ApiList<T> {
    /// ID of the last object of the page, the cursor for the following page.
    pub fn last_id(&self) -> Option<&str> {
        self.data.last().and_then(Object::id)
    }

    /// ID of the first object of the page, the cursor for the preceding page.
    pub fn first_id(&self) -> Option<&str> {
        self.data.first().and_then(Object::id)
    }
}

/// Parameters of a list endpoint, paginated with object ID cursors.
pub trait ListParams: Clone {
    fn limit(&self) -> Option<u32>;
    fn starting_after(&self) -> Option<&str>;
    fn ending_before(&self) -> Option<&str>;
    fn set_starting_after(&mut self, id: String);
    fn set_ending_before(&mut self, id: String);

    /// A list walked with `ending_before` and no `starting_after` is paged backwards.
    fn is_backwards(&self) -> bool {
        self.ending_before().is_some() && self.starting_after().is_none()
    }
}

macro_rules! impl_list_params {
    ($($params:ty),+ $(,)?) => {
        $(
            impl $crate::common::ListParams for $params {
                fn limit(&self) -> Option<u32> {
                    self.limit
                }

                fn starting_after(&self) -> Option<&str> {
                    self.starting_after.as_deref()
                }

                fn ending_before(&self) -> Option<&str> {
                    self.ending_before.as_deref()
                }

                fn set_starting_after(&mut self, id: String) {
                    self.starting_after = Some(id);
                }

                fn set_ending_before(&mut self, id: String) {
                    self.ending_before = Some(id);
                }
            }
        )+
    };
}
pub(crate) use impl_list_params;

/// Postal address as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub country: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
}

/// Postal address sent with a request, every line optional.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressParams {
    pub city: Option<String>,
    pub country: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
}

/// Postal address sent with a request where city, country, first line and postal code must be
/// present.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredAddressParams {
    pub city: String,
    pub country: String,
    pub line1: String,
    pub line2: Option<String>,
    pub postal_code: String,
    pub state: Option<String>,
}
