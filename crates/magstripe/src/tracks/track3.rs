//! Track 3 field extraction.
//!
//! Track 3 is a fixed-width space-padded layout: record code, license type,
//! class, license number, and office columns. Collapsing the padding leaves
//! a leading empty field, so the positional indexes below are shifted by one
//! relative to the visible columns. Some captures carry the cardholder name
//! here instead, between `^` separators.

use tracing::{error, info, trace};

use crate::constants::TRACK1_FIELD_SEPARATOR;
use crate::fields::FieldStore;

/// Extracts track 3 fields into the store.
pub(crate) fn decode(payload: &[u8], fields: &mut FieldStore) {
    let collapsed = super::collapse_spaces(payload);
    let parts: Vec<&[u8]> = collapsed.split(|&b| b == b' ').collect();

    if parts.len() != 6 && collapsed.contains(&TRACK1_FIELD_SEPARATOR) {
        let trimmed = collapsed.trim_ascii_start();
        if let Some(name) = trimmed.split(|&b| b == TRACK1_FIELD_SEPARATOR).nth(1) {
            fields.set("name", name);
            info!("fell back to parsing name from track 3");
        }
        return;
    }

    trace!("track 3 field count {}", parts.len());
    if parts.len() != 6 && parts.len() != 5 {
        error!("unable to properly parse track 3: {}", payload.escape_ascii());
    }
    if let Some(&part) = parts.first() {
        fields.set("track3_field_0", part);
    }
    if let Some(&part) = parts.get(1) {
        fields.set("license_type", part);
        fields.set("track3_field_1", part);
    }
    if let Some(&part) = parts.get(2) {
        fields.set("track3_field_2", part);
        // The license number sits one column past the gate: the collapsed
        // buffer starts with an empty field, shifting the padded layout's
        // columns up by one.
        if let Some(&number) = parts.get(3) {
            fields.set("license_number", number);
        }
    }
    if parts.len() >= 4 {
        fields.set("track3_field_3", parts[2]);
    }
    if let Some(&part) = parts.get(4) {
        fields.set("track3_field_4", part);
    }
    if let Some(&part) = parts.get(5) {
        fields.set("track3_field_5", part);
    }
}
