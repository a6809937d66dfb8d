//! Decoded swipe record and the one-pass decode entry point.

use std::borrow::Cow;
use std::fmt;

use tracing::{debug, trace, warn};

use crate::fields::FieldStore;
use crate::frame::{is_full_read, FrameKind};
use crate::tracks::{self, TrackSegment};

/// Expiration code meaning "no expiration".
const NO_EXPIRATION: &[u8] = b"9999";

/// A decoded card swipe: the populated field map plus the raw track
/// payloads the fields were extracted from.
///
/// Constructed in one pass by [`LicenseRecord::decode`] and read-only
/// afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LicenseRecord {
    fields: FieldStore,
    track_1: Option<Vec<u8>>,
    track_2: Option<Vec<u8>>,
    track_3: Option<Vec<u8>>,
}

impl LicenseRecord {
    /// Decodes a raw swipe capture.
    ///
    /// Never fails: framing or track-shape anomalies are logged and the
    /// decoder keeps whatever fields its heuristics recover, so a noisy
    /// capture degrades to a sparsely populated record instead of an error.
    pub fn decode(payload: &[u8]) -> LicenseRecord {
        let mut record = LicenseRecord::default();
        if payload.is_empty() {
            warn!("empty swipe capture");
            return record;
        }
        if !is_full_read(payload) {
            warn!("not a full card read: {}", payload.escape_ascii());
        }
        let kind = FrameKind::detect(payload);
        debug!("detected {kind:?} framing");
        let data = kind.strip(payload);
        for segment in tracks::split_tracks(data) {
            match segment {
                TrackSegment::Track1(body) => {
                    debug!("parsing track 1");
                    record.track_1 = Some(body.to_vec());
                    tracks::track1::decode(body, &mut record.fields);
                }
                TrackSegment::Track2(body) => {
                    debug!("parsing track 2");
                    record.track_2 = Some(body.to_vec());
                    tracks::track2::decode(body, &mut record.fields);
                }
                TrackSegment::Track3(body) => {
                    debug!("parsing track 3");
                    record.track_3 = Some(body.to_vec());
                    tracks::track3::decode(body, &mut record.fields);
                }
                TrackSegment::Unrecognized(segment) => {
                    trace!("ignoring unrecognized segment: {}", segment.escape_ascii());
                }
            }
        }
        record
    }

    /// Returns a field value decoded to text, or `None` if unset.
    pub fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.fields.get(name).map(String::from_utf8_lossy)
    }

    /// Returns the raw bytes of a field, if set.
    pub fn field_bytes(&self, name: &str) -> Option<&[u8]> {
        self.fields.get(name)
    }

    /// The full field map, in discovery order.
    pub fn fields(&self) -> &FieldStore {
        &self.fields
    }

    /// Raw track 1 payload (sentinel stripped), if the track was present.
    pub fn track_1(&self) -> Option<&[u8]> {
        self.track_1.as_deref()
    }

    /// Raw track 2 payload (sentinel stripped), if the track was present.
    pub fn track_2(&self) -> Option<&[u8]> {
        self.track_2.as_deref()
    }

    /// Raw track 3 payload (sentinel stripped), if the track was present.
    pub fn track_3(&self) -> Option<&[u8]> {
        self.track_3.as_deref()
    }

    /// Normalized six-character expiration date, or `None` if unset.
    ///
    /// The raw code is `YYMM` with an implicit 2000s century; the `9999`
    /// code means "no expiration" and maps to the fixed `999912`.
    pub fn expiration_date(&self) -> Option<String> {
        let exp = self.fields.get("expiration_date")?;
        if exp == NO_EXPIRATION {
            return Some("999912".to_owned());
        }
        let yy = exp.get(..2).unwrap_or(exp);
        let mm = exp.get(2..exp.len().min(4)).unwrap_or(&[]);
        Some(format!(
            "20{}{}",
            String::from_utf8_lossy(yy),
            String::from_utf8_lossy(mm)
        ))
    }
}

/// Diagnostic form: license number, name, the field map, and the raw
/// tracks, newline-separated. For logging only, not a stable interface.
impl fmt::Display for LicenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.field("license_number").unwrap_or(Cow::Borrowed("-")))?;
        writeln!(f, "{}", self.field("name").unwrap_or(Cow::Borrowed("-")))?;
        writeln!(f, "{}", self.fields)?;
        writeln!(f, "{}", display_track(self.track_1()))?;
        writeln!(f, "{}", display_track(self.track_2()))?;
        write!(f, "{}", display_track(self.track_3()))
    }
}

fn display_track(track: Option<&[u8]>) -> String {
    match track {
        Some(bytes) => bytes.escape_ascii().to_string(),
        None => "-".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiration_sentinel_maps_to_far_future() {
        let record = LicenseRecord::decode(b";600764123=999919740824=?");
        assert_eq!(record.expiration_date(), Some("999912".to_owned()));
    }

    #[test]
    fn expiration_code_gets_century_prefix() {
        let record = LicenseRecord::decode(b";600764123=220519720501=?");
        assert_eq!(record.field("expiration_date").as_deref(), Some("2205"));
        assert_eq!(record.expiration_date(), Some("202205".to_owned()));
    }

    #[test]
    fn expiration_absent_when_track_2_missing() {
        let record = LicenseRecord::decode(b"%  ^SANTIWONG SUVINAI MR.^^?");
        assert_eq!(record.expiration_date(), None);
    }

    #[test]
    fn empty_capture_yields_empty_record() {
        let record = LicenseRecord::decode(b"");
        assert!(record.fields().is_empty());
        assert_eq!(record.track_1(), None);
        assert_eq!(record.track_2(), None);
        assert_eq!(record.track_3(), None);
    }

    #[test]
    fn partial_read_still_decodes() {
        // Missing the closing delimiter entirely: framing validation warns
        // but field extraction still runs.
        let record = LicenseRecord::decode(b";6007643250900001812=999919740824=");
        assert_eq!(record.field("id_number").as_deref(), Some("3250900001812"));
    }

    #[test]
    fn display_is_newline_separated() {
        let record = LicenseRecord::decode(b"%  ^SANTIWONG SUVINAI MR.^^?");
        let text = record.to_string();
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "-");
        assert_eq!(lines[1], "SANTIWONG SUVINAI MR.");
        assert_eq!(lines[3], "  ^SANTIWONG SUVINAI MR.^^");
        assert_eq!(lines[4], "-");
    }
}
