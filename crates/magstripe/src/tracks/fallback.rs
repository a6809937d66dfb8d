//! Space-delimited license-number recovery.
//!
//! Last-resort layout for payloads that carry neither `^` separators nor a
//! name marker: four space-delimited columns with the license number third.

use tracing::error;

use crate::fields::FieldStore;

const EXPECTED_FIELDS: usize = 4;

/// Attempts to recover a license number from a space-delimited payload.
///
/// Anything other than exactly four columns is discarded.
pub(crate) fn extract_license_number(payload: &[u8], fields: &mut FieldStore) {
    let collapsed = super::collapse_spaces(payload);
    let trimmed = collapsed.trim_ascii();
    let parts: Vec<&[u8]> = trimmed.split(|&b| b == b' ').collect();
    if parts.len() == EXPECTED_FIELDS {
        fields.set("license_number", parts[2]);
    } else {
        error!(
            "field count mismatch, expected {} but got {}, ignoring",
            EXPECTED_FIELDS,
            parts.len()
        );
    }
}
