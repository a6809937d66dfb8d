//! Card reader envelope unwrapping.
//!
//! Readers deliver a swipe as a JSON envelope holding a base64-encoded
//! `card_read` value. This crate peels the envelope and hands the raw
//! capture to [`magstripe`]. Failing to obtain a byte buffer at all is the
//! only fatal condition in the system; once a capture exists, anomalies
//! degrade gracefully inside the core decoder.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let envelope = json!({ "card_read": "JSAgXkEgTVIuXl4/" });
//! let record = magstripe_transport::parse_card_reader_data(&envelope).unwrap();
//! assert_eq!(record.field("name").as_deref(), Some("A MR."));
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, trace};

pub use magstripe::LicenseRecord;

/// Envelope key holding the base64-encoded capture.
const CARD_READ_KEY: &str = "card_read";

/// Failure to obtain a raw capture from the transport envelope.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The envelope carries no `card_read` string.
    #[error("no card read to parse in payload")]
    MissingCardRead,
    /// The `card_read` value is not valid base64.
    #[error("invalid base64 card read")]
    Base64(#[from] base64::DecodeError),
    /// The `card_read` value decoded to zero bytes.
    #[error("empty card read payload")]
    EmptyPayload,
}

/// Unwraps a card reader envelope and decodes the capture it carries.
///
/// Returns an error only when no usable byte buffer can be extracted;
/// a decodable capture always yields a record, however sparse.
pub fn parse_card_reader_data(data: &Value) -> Result<LicenseRecord, TransportError> {
    let Some(encoded) = data.get(CARD_READ_KEY).and_then(Value::as_str) else {
        error!("no card read to parse in payload: {data}");
        return Err(TransportError::MissingCardRead);
    };
    let payload = match STANDARD.decode(encoded) {
        Ok(payload) => payload,
        Err(err) => {
            error!("unable to decode card read {encoded}: {err}");
            return Err(TransportError::Base64(err));
        }
    };
    if payload.is_empty() {
        error!("card read decoded to zero bytes");
        return Err(TransportError::EmptyPayload);
    }
    trace!("card read payload: {}", payload.escape_ascii());
    Ok(LicenseRecord::decode(&payload))
}
