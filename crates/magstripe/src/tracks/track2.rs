//! Track 2 field extraction.
//!
//! Track 2 is `=`-separated: PAN, then a combined expiration/birth-date
//! block, then a discretionary trailer.

use tracing::{error, trace};

use crate::constants::TRACK2_FIELD_SEPARATOR;
use crate::fields::FieldStore;

/// Extracts track 2 fields into the store.
pub(crate) fn decode(payload: &[u8], fields: &mut FieldStore) {
    let parts: Vec<&[u8]> = payload.split(|&b| b == TRACK2_FIELD_SEPARATOR).collect();
    trace!("track 2 field count {}", parts.len());
    if parts.len() != 3 {
        error!("unable to properly parse track 2: {}", payload.escape_ascii());
    }
    if let Some(&part) = parts.first() {
        fields.set("track2_field0", part);
        fields.set("pan", part);
    }
    if let Some(&part) = parts.get(1) {
        fields.set("track2_field1", part);
        // First four bytes are the YYMM expiration code, the rest is the
        // date of birth.
        let split = part.len().min(4);
        fields.set("expiration_date", &part[..split]);
        fields.set("date_of_birth", &part[split..]);
    }
    if let Some(&part) = parts.get(2) {
        fields.set("track2_field2", part);
    }
}
