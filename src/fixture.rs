use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::path::Path;

/// Database every fixture targets; the data loader expects this name.
pub const FIXTURE_DB: &str = "tdvt";

/// Collection name for an input file: base name with the exact `.csv`
/// suffix stripped, lower-cased. Stripping is a no-op when the suffix is
/// absent, so re-applying the derivation changes nothing.
pub fn collection_name(path: &Path) -> String {
    let base = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or(Cow::Borrowed(""));
    base.strip_suffix(".csv").unwrap_or(&base).to_lowercase()
}

/// One CSV data record, keyed by header. Insertion order is header order;
/// `None` marks a cell missing from a record shorter than the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<(String, Option<String>)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. A repeated header keeps its original position and
    /// takes the new value (last value wins).
    pub fn push(&mut self, header: &str, value: Option<String>) {
        if let Some((_, slot)) = self.fields.iter_mut().find(|(k, _)| k == header) {
            *slot = value;
        } else {
            self.fields.push((header.to_string(), value));
        }
    }

    /// Outer `None`: no such column. Inner `None`: column present, cell absent.
    pub fn get(&self, header: &str) -> Option<Option<&str>> {
        self.fields
            .iter()
            .find(|(k, _)| k == header)
            .map(|(_, v)| v.as_deref())
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// Serialized as a mapping in insertion order, absent cells as `null`.
impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (header, value) in &self.fields {
            map.serialize_entry(header, value)?;
        }
        map.end()
    }
}

/// One `dataset` entry: a namespace plus its documents. Field declaration
/// order here is the output key order.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetEntry {
    pub db: String,
    pub collection: String,
    pub docs: Vec<Row>,
}

/// The full fixture file: a `dataset` sequence wrapping a single entry.
/// The loader accepts multiple entries per file; this tool emits one.
#[derive(Debug, Clone, Serialize)]
pub struct FixtureDocument {
    pub dataset: Vec<DatasetEntry>,
}

impl FixtureDocument {
    /// Wrap `docs` in the fixed envelope for `collection`.
    pub fn new(collection: impl Into<String>, docs: Vec<Row>) -> Self {
        Self {
            dataset: vec![DatasetEntry {
                db: FIXTURE_DB.to_string(),
                collection: collection.into(),
                docs,
            }],
        }
    }
}
