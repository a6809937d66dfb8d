//! Reader framing detection and stripping.
//!
//! Physical readers disagree on how a capture is delimited: some wrap it in
//! STX/ETX control bytes, some only terminate with a line feed, and some send
//! the bare track data. Classification is pure; the caller decides what to do
//! with incomplete reads.

use crate::constants::{ETX, LF, STX, TRACK1_SENTINEL, TRACK_DELIMITER};

/// Framing convention of a raw swipe capture, keyed on reader model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// CR1300-style readers wrapping the capture in STX/ETX.
    Cr1300,
    /// MSR100-style readers sending no start byte and ending with a line feed.
    Msr100,
    /// Anything else; the capture is taken as-is.
    Generic,
}

impl FrameKind {
    /// Classifies a capture by its framing bytes.
    pub fn detect(data: &[u8]) -> FrameKind {
        match (data.first(), data.last()) {
            (Some(&STX), _) => FrameKind::Cr1300,
            (Some(&TRACK1_SENTINEL), Some(&LF)) => FrameKind::Msr100,
            _ => FrameKind::Generic,
        }
    }

    /// Strips the reader framing bytes, leaving the track data.
    ///
    /// Buffers too short to carry the framing are returned unchanged.
    pub fn strip<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        match self {
            FrameKind::Cr1300 if data.len() >= 2 => &data[1..data.len() - 1],
            FrameKind::Msr100 if !data.is_empty() => &data[..data.len() - 1],
            _ => data,
        }
    }
}

/// Returns true when the capture carries one of the known complete-read
/// framings: `%`…`?`, `%`…LF, or STX…ETX.
pub fn is_full_read(data: &[u8]) -> bool {
    let (Some(&first), Some(&last)) = (data.first(), data.last()) else {
        return false;
    };
    (first == TRACK1_SENTINEL && last == TRACK_DELIMITER)
        || (first == TRACK1_SENTINEL && last == LF)
        || (first == STX && last == ETX)
}
