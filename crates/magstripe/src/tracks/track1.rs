//! Track 1 field extraction.
//!
//! Track 1 normally carries the PAN and the cardholder name between `^`
//! separators. Some reader layouts drop the separators and send either a
//! bare name or a space-delimited license-number line instead; names are
//! told apart from license numbers by the honorific marker byte `M`
//! (MR. / MRS. / MISS).

use tracing::{error, trace};

use crate::constants::TRACK1_FIELD_SEPARATOR;
use crate::fields::FieldStore;

use super::fallback;

/// Extracts track 1 fields into the store.
pub(crate) fn decode(payload: &[u8], fields: &mut FieldStore) {
    if payload.contains(&TRACK1_FIELD_SEPARATOR) {
        let parts: Vec<&[u8]> = payload.split(|&b| b == TRACK1_FIELD_SEPARATOR).collect();
        trace!("track 1 field count {}", parts.len());
        if parts.len() != 4 {
            error!("unable to properly parse track 1: {}", payload.escape_ascii());
        }
        if let Some(&part) = parts.first() {
            fields.set("track1_field0", part);
            fields.set("pan", part);
        }
        if let Some(&part) = parts.get(1) {
            fields.set("track1_field1", part);
            if part.contains(&b'M') {
                fields.set("name", part);
            } else {
                error!(
                    "no name marker in track 1 field {}, trying license extraction",
                    part.escape_ascii()
                );
                fallback::extract_license_number(payload, fields);
            }
        }
        if let Some(&part) = parts.get(2) {
            fields.set("track1_field2", part);
            fields.set("expiration_date_sc_disc", part);
        }
        if let Some(&part) = parts.get(3) {
            fields.set("track1_field3", part);
            fields.set("end", part);
        }
    } else {
        let name = payload.trim_ascii();
        if name.contains(&b'M') {
            fields.set("name", name);
        } else {
            error!(
                "no name marker in track 1 {}, trying license extraction",
                name.escape_ascii()
            );
            fallback::extract_license_number(payload, fields);
        }
    }
}
