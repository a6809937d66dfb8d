//! Ordered field storage with first-write-wins semantics.

use std::fmt;

use indexmap::IndexMap;

/// Insertion-ordered map of decoded field name to value bytes.
///
/// Once a field is set it is never overwritten; later decoders writing the
/// same name are silently ignored, which is what gives track 1 precedence
/// over track 3 for the fields both can carry. Values are stored with
/// trailing ASCII whitespace stripped; a value that is empty after stripping
/// is not stored at all.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldStore {
    fields: IndexMap<String, Vec<u8>>,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a field value unless the name is already set.
    ///
    /// Writing `pan` cascades into the derived `pan_1` (six-byte issuer
    /// prefix) and `id_number` (remainder) fields, under the same
    /// first-write rule.
    pub fn set(&mut self, name: &str, value: &[u8]) {
        let cleaned = value.trim_ascii_end();
        if cleaned.is_empty() || self.fields.contains_key(name) {
            return;
        }
        self.fields.insert(name.to_owned(), cleaned.to_vec());
        if name == "pan" {
            let (pan_1, id_number) = cleaned.split_at(cleaned.len().min(6));
            self.set("pan_1", pan_1);
            self.set("id_number", id_number);
        }
    }

    /// Returns the stored bytes for a field, if set.
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.fields.get(name).map(Vec::as_slice)
    }

    /// Iterates fields in the order they were discovered.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for FieldStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: \"{}\"", value.escape_ascii())?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_write_wins() {
        let mut fields = FieldStore::new();
        fields.set("name", b"FIRST");
        fields.set("name", b"SECOND");
        assert_eq!(fields.get("name"), Some(&b"FIRST"[..]));
    }

    #[test]
    fn trailing_whitespace_stripped() {
        let mut fields = FieldStore::new();
        fields.set("name", b"MATTHEW CLARK   ");
        assert_eq!(fields.get("name"), Some(&b"MATTHEW CLARK"[..]));
    }

    #[test]
    fn empty_values_not_stored() {
        let mut fields = FieldStore::new();
        fields.set("name", b"");
        fields.set("end", b"   \r");
        assert_eq!(fields.get("name"), None);
        assert_eq!(fields.get("end"), None);
        assert!(fields.is_empty());
    }

    #[test]
    fn pan_cascades_into_prefix_and_id() {
        let mut fields = FieldStore::new();
        fields.set("pan", b"6007643100400461157");
        assert_eq!(fields.get("pan_1"), Some(&b"600764"[..]));
        assert_eq!(fields.get("id_number"), Some(&b"3100400461157"[..]));
    }

    #[test]
    fn short_pan_leaves_id_unset() {
        let mut fields = FieldStore::new();
        fields.set("pan", b"1");
        assert_eq!(fields.get("pan_1"), Some(&b"1"[..]));
        assert_eq!(fields.get("id_number"), None);
    }

    #[test]
    fn pan_cascade_never_overwrites_id() {
        let mut fields = FieldStore::new();
        fields.set("id_number", b"EXISTING");
        fields.set("pan", b"6007643100400461157");
        assert_eq!(fields.get("id_number"), Some(&b"EXISTING"[..]));
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut fields = FieldStore::new();
        fields.set("zeta", b"1");
        fields.set("alpha", b"2");
        fields.set("mid", b"3");
        let names: Vec<&str> = fields.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn display_is_ordered_and_escaped() {
        let mut fields = FieldStore::new();
        fields.set("pan", b"12345");
        assert_eq!(fields.to_string(), "{pan: \"12345\", pan_1: \"12345\"}");
    }
}
