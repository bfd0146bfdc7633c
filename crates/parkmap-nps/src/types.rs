//! NPS API listing envelope.
//!
//! Every listing endpoint answers with the same shape:
//!
//! ```json
//! { "total": "474", "limit": "100", "start": "0", "data": [ { ... }, ... ] }
//! ```
//!
//! `total` is observed as a numeric **string** on the live API, but a plain
//! integer is accepted as well. Records inside `data` stay untyped here;
//! [`crate::validate`] turns them into [`parkmap_core::Site`]s.

use serde::Deserialize;

use crate::error::NpsError;

/// One untyped record from the `data` array.
pub type RawRecord = serde_json::Value;

/// One page of a listing endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPage {
    /// Total record count across all pages, when the page reports it.
    pub total: Option<u64>,
    pub data: Vec<RawRecord>,
}

#[derive(Debug, Deserialize)]
struct PageEnvelope {
    #[serde(default)]
    total: Option<serde_json::Value>,
    #[serde(default)]
    data: Option<Vec<RawRecord>>,
}

impl RawPage {
    /// Checks a decoded response body against the listing envelope.
    ///
    /// # Errors
    ///
    /// Returns [`NpsError::Protocol`] if the body is not an object, `data` is
    /// missing or not an array, or `total` is present but not a non-negative
    /// integer.
    pub fn from_body(url: &str, body: serde_json::Value) -> Result<Self, NpsError> {
        let protocol = |reason: String| NpsError::Protocol {
            url: url.to_owned(),
            reason,
        };

        let envelope: PageEnvelope =
            serde_json::from_value(body).map_err(|e| protocol(format!("malformed page: {e}")))?;

        let data = envelope
            .data
            .ok_or_else(|| protocol("unable to find key 'data'".to_owned()))?;

        let total = envelope
            .total
            .map(|v| parse_total(&v).ok_or_else(|| protocol(format!("invalid 'total' value {v}"))))
            .transpose()?;

        Ok(Self { total, data })
    }
}

fn parse_total(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
