//! Serde helpers for the two encodings a request travels in: form bodies and query strings
//! out, JSON in.

use error_stack::ResultExt;
use serde::{Deserialize, Serialize};

use crate::errors::{self, CustomResult};

/// Form encoding of request parameters.
pub trait Encode {
    /// Serializes `self` as `application/x-www-form-urlencoded`. Nested hashes and arrays use
    /// bracket notation (`address[city]=..`, `expand[0]=..`) and `None` fields are left out.
    fn url_encode(&self) -> CustomResult<String, errors::ParsingError>;
}

impl<A> Encode for A
where
    A: Serialize + std::fmt::Debug,
{
    fn url_encode(&self) -> CustomResult<String, errors::ParsingError> {
        serde_qs::to_string(self)
            .change_context(errors::ParsingError::EncodeError("url-encoded"))
            .attach_printable_lazy(|| format!("Unable to form encode {self:?}"))
    }
}

/// JSON decoding of response bodies.
pub trait BytesExt {
    /// Parses the body as `T`. `type_name` names the target in the error.
    fn parse_struct<'de, T>(
        &'de self,
        type_name: &'static str,
    ) -> CustomResult<T, errors::ParsingError>
    where
        T: Deserialize<'de>;
}

impl BytesExt for bytes::Bytes {
    fn parse_struct<'de, T>(
        &'de self,
        type_name: &'static str,
    ) -> CustomResult<T, errors::ParsingError>
    where
        T: Deserialize<'de>,
    {
        serde_json::from_slice::<T>(self)
            .change_context(errors::ParsingError::StructParseFailure(type_name))
            .attach_printable_lazy(|| {
                format!(
                    "Unable to parse {type_name} from body {:?}",
                    String::from_utf8_lossy(self)
                )
            })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::collections::BTreeMap;

    use super::*;

    #[derive(Debug, Serialize)]
    struct Address {
        city: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        line2: Option<&'static str>,
    }

    #[derive(Debug, Serialize)]
    struct Params {
        address: Address,
        expand: Vec<&'static str>,
        metadata: BTreeMap<&'static str, &'static str>,
    }

    #[test]
    fn url_encode_uses_bracket_notation() {
        let params = Params {
            address: Address {
                city: "Berlin",
                line2: None,
            },
            expand: vec!["charge"],
            metadata: BTreeMap::from([("order_id", "6735")]),
        };

        let encoded = params.url_encode().unwrap();
        let decoded: Vec<(String, String)> = encoded
            .split('&')
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap();
                (
                    key.replace("%5B", "[").replace("%5D", "]"),
                    value.to_string(),
                )
            })
            .collect();

        assert_eq!(
            decoded,
            vec![
                ("address[city]".to_string(), "Berlin".to_string()),
                ("expand[0]".to_string(), "charge".to_string()),
                ("metadata[order_id]".to_string(), "6735".to_string()),
            ]
        );
    }

    #[test]
    fn parse_struct_reports_type_name() {
        let body = bytes::Bytes::from_static(b"{\"not\":");
        let result: CustomResult<serde_json::Value, _> = body.parse_struct("Dispute");
        let error = result.unwrap_err();

        assert!(matches!(
            error.current_context(),
            errors::ParsingError::StructParseFailure("Dispute")
        ));
    }
}
