//! Data models for issuedash.

use serde::{Deserialize, Serialize};

/// One row of the configured column projection, as returned by the store.
///
/// Field order matches `DashConfig::columns`; the first field is the
/// canonical issue key. Records are immutable once mapped from a store row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    fields: Vec<String>,
}

impl IssueRecord {
    #[must_use]
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// The canonical key field (first projected column).
    ///
    /// Empty when the record carries no fields at all, which a well-formed
    /// projection never produces.
    #[must_use]
    pub fn key(&self) -> &str {
        self.fields.first().map_or("", String::as_str)
    }

    /// Field value at `idx` in projection order.
    #[must_use]
    pub fn field(&self, idx: usize) -> Option<&str> {
        self.fields.get(idx).map(String::as_str)
    }

    /// All field values in projection order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_first_field() {
        let rec = IssueRecord::new(vec![
            "PROJ-12".to_string(),
            "Crash on startup".to_string(),
            "Open".to_string(),
        ]);
        assert_eq!(rec.key(), "PROJ-12");
        assert_eq!(rec.field(2), Some("Open"));
        assert_eq!(rec.field(3), None);
    }

    #[test]
    fn empty_record_has_empty_key() {
        assert_eq!(IssueRecord::new(Vec::new()).key(), "");
    }
}
