//! Ordered collections of parameter records.
//!
//! A [`Document`] keeps records in the order they were appended. That order
//! drives the canonical string form; equality ignores it and compares the
//! records as a multiset.

use std::fmt;

use serde::Serialize;

use crate::{Error, ParameterRecord, Result, SCHEME_PREFIX};

/// Rendered in place of a URI when a document has no parameters.
pub const EMPTY_DOCUMENT: &str = "the Magnet URI has no parameters";

/// A parsed magnet URI.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Document {
    records: Vec<ParameterRecord>,
}

/// One row of the tabular view of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry<'a> {
    /// Position of the record in the document.
    pub position: usize,
    pub prefix: &'a str,
    /// Sub-index or experimental suffix (empty if none).
    pub index: &'a str,
    pub label: &'a str,
    pub value: &'a str,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated record.
    pub fn push(&mut self, record: ParameterRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ParameterRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParameterRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check if any record carries the given prefix tag.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.records.iter().any(|r| r.prefix().matches(prefix))
    }

    /// Check that every listed prefix tag is present. An empty list is
    /// trivially satisfied.
    pub fn has_all_prefixes<I>(&self, prefixes: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        prefixes.into_iter().all(|p| self.has_prefix(p.as_ref()))
    }

    /// Records with the given prefix tag, in document order.
    pub fn records_with_prefix(&self, prefix: &str) -> Result<Vec<&ParameterRecord>> {
        let matching: Vec<&ParameterRecord> = self
            .records
            .iter()
            .filter(|r| r.prefix().matches(prefix))
            .collect();

        if matching.is_empty() {
            return Err(Error::NoMatch(prefix.to_string()));
        }
        Ok(matching)
    }

    /// Build a new document grouped by the requested prefixes.
    ///
    /// Groups follow the order of `prefixes`; within a group records keep
    /// their original relative order. Prefixes that match nothing, including
    /// unknown tags, contribute no records.
    pub fn filter<I>(&self, prefixes: I) -> Document
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut filtered = Document::new();
        for prefix in prefixes {
            let prefix = prefix.as_ref();
            for record in self.records.iter().filter(|r| r.prefix().matches(prefix)) {
                filtered.push(record.clone());
            }
        }
        tracing::trace!(
            source = self.len(),
            kept = filtered.len(),
            "filtered magnet document"
        );
        filtered
    }

    /// Enumerate records for tabular display.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> + '_ {
        self.records.iter().enumerate().map(|(position, r)| Entry {
            position,
            prefix: r.prefix().as_str(),
            index: r.index(),
            label: r.prefix().label(),
            value: r.value(),
        })
    }

    fn sorted(&self) -> Vec<&ParameterRecord> {
        let mut records: Vec<&ParameterRecord> = self.records.iter().collect();
        records.sort_unstable();
        records
    }
}

impl PartialEq for Document {
    /// Multiset comparison: same records with the same multiplicities, in
    /// any order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.sorted() == other.sorted()
    }
}

impl Eq for Document {}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return f.write_str(EMPTY_DOCUMENT);
        }

        f.write_str(SCHEME_PREFIX)?;
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a ParameterRecord;
    type IntoIter = std::slice::Iter<'a, ParameterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<ParameterRecord> for Document {
    fn from_iter<T: IntoIterator<Item = ParameterRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
