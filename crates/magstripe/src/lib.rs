//! Magnetic stripe swipe decoding.
//!
//! Decodes raw swipe captures from heterogeneous card readers into a
//! normalized field map. Reader models disagree on framing bytes, and the
//! tracks themselves arrive in varying, sometimes malformed layouts; the
//! decoder recovers as much structured data as it can instead of failing
//! outright.
//!
//! # Example
//!
//! ```
//! use magstripe::LicenseRecord;
//!
//! let capture = b"\x02%  ^SANTIWONG SUVINAI MR.^^?;6007643100400461157=999919741025=?\x03";
//! let record = LicenseRecord::decode(capture);
//!
//! assert_eq!(record.field("name").as_deref(), Some("SANTIWONG SUVINAI MR."));
//! assert_eq!(record.field("id_number").as_deref(), Some("3100400461157"));
//! assert_eq!(record.expiration_date().as_deref(), Some("999912"));
//! ```

pub mod constants;
pub mod fields;
pub mod frame;
pub mod record;
pub mod tracks;

pub use fields::FieldStore;
pub use frame::{is_full_read, FrameKind};
pub use record::LicenseRecord;
pub use tracks::{split_tracks, TrackSegment};
