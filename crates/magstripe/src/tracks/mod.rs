//! Track segmentation, classification, and per-track decoders.

use std::sync::OnceLock;

use regex::bytes::Regex;

use crate::constants::{TRACK1_SENTINEL, TRACK2_SENTINEL, TRACK3_SENTINEL, TRACK_DELIMITER};

pub(crate) mod fallback;
pub(crate) mod track1;
pub(crate) mod track2;
pub(crate) mod track3;

/// A single segment of a swipe capture, classified by its leading sentinel.
///
/// The carried slice has the one-byte sentinel already stripped; unrecognized
/// segments keep their bytes untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackSegment<'a> {
    Track1(&'a [u8]),
    Track2(&'a [u8]),
    Track3(&'a [u8]),
    Unrecognized(&'a [u8]),
}

impl<'a> TrackSegment<'a> {
    /// Classifies a segment by its first byte.
    pub fn classify(segment: &'a [u8]) -> TrackSegment<'a> {
        match segment.first() {
            Some(&TRACK1_SENTINEL) => TrackSegment::Track1(&segment[1..]),
            Some(&TRACK2_SENTINEL) => TrackSegment::Track2(&segment[1..]),
            Some(&TRACK3_SENTINEL) => TrackSegment::Track3(&segment[1..]),
            _ => TrackSegment::Unrecognized(segment),
        }
    }
}

/// Splits framing-stripped capture data into classified track segments.
///
/// Segments are separated by the `?` delimiter; zero-length segments are
/// dropped.
pub fn split_tracks(data: &[u8]) -> Vec<TrackSegment<'_>> {
    data.split(|&b| b == TRACK_DELIMITER)
        .filter(|segment| !segment.is_empty())
        .map(TrackSegment::classify)
        .collect()
}

/// Collapses runs of space bytes down to a single space.
pub(crate) fn collapse_spaces(payload: &[u8]) -> Vec<u8> {
    static SPACE_RUNS: OnceLock<Regex> = OnceLock::new();
    let re = SPACE_RUNS.get_or_init(|| Regex::new("  +").expect("space-run pattern compiles"));
    re.replace_all(payload, &b" "[..]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_sentinel() {
        assert_eq!(TrackSegment::classify(b"%abc"), TrackSegment::Track1(b"abc"));
        assert_eq!(TrackSegment::classify(b";123"), TrackSegment::Track2(b"123"));
        assert_eq!(TrackSegment::classify(b"+  x"), TrackSegment::Track3(b"  x"));
        assert_eq!(TrackSegment::classify(b"\rjunk"), TrackSegment::Unrecognized(b"\rjunk"));
    }

    #[test]
    fn split_drops_empty_segments() {
        let segments = split_tracks(b"%a??;b?");
        assert_eq!(
            segments,
            [TrackSegment::Track1(b"a"), TrackSegment::Track2(b"b")]
        );
    }

    #[test]
    fn split_keeps_unrecognized_segments() {
        let segments = split_tracks(b"%a?\r");
        assert_eq!(
            segments,
            [TrackSegment::Track1(b"a"), TrackSegment::Unrecognized(b"\r")]
        );
    }

    #[test]
    fn collapse_space_runs() {
        assert_eq!(collapse_spaces(b"  a   b c  "), b" a b c ");
        assert_eq!(collapse_spaces(b"abc"), b"abc");
        assert_eq!(collapse_spaces(b""), b"");
    }
}
