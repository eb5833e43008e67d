//! Header-keyed records projected from tokenized rows.

use std::collections::HashMap;

use crate::tokenizer::Row;

/// One data row keyed by the (trimmed) header strings.
///
/// Every header column has an entry; cells missing from a short row are `""`.
/// Keys keep the sheet's exact spelling, so case-insensitive access goes
/// through [`Record::probe`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Raw cell for `key`, untrimmed. `None` when the column does not exist.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// First value among `keys` that is non-empty after trimming, trimmed.
    /// Returns `""` when no candidate column has content.
    pub fn probe<S: AsRef<str>>(&self, keys: &[S]) -> String {
        keys.iter()
            .filter_map(|k| self.get(k.as_ref()))
            .map(str::trim)
            .find(|v| !v.is_empty())
            .unwrap_or_default()
            .to_string()
    }

    /// First value among `keys` that is non-empty as stored, trimmed.
    ///
    /// Unlike [`Record::probe`], a whitespace-only cell still wins the lookup
    /// and comes back as `""`; later spellings are not consulted.
    pub fn first_present<S: AsRef<str>>(&self, keys: &[S]) -> String {
        keys.iter()
            .filter_map(|k| self.get(k.as_ref()))
            .find(|v| !v.is_empty())
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    }

    /// Column names present in this record.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no columns at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The spellings a sheet column is accepted under: `Exact`, `ALLCAPS`, `lowercase`.
pub fn case_variants(field: &str) -> [String; 3] {
    [
        field.to_string(),
        field.to_uppercase(),
        field.to_lowercase(),
    ]
}

/// Turn row 0 into a header and every later row into a [`Record`].
///
/// Short rows are padded with `""`; cells beyond the header are dropped.
/// When a header name repeats, the rightmost column wins.
pub fn project(rows: &[Row]) -> Vec<Record> {
    let Some((header_row, data)) = rows.split_first() else {
        return Vec::new();
    };
    let header: Vec<String> = header_row.iter().map(|h| h.trim().to_string()).collect();

    data.iter()
        .map(|row| {
            header
                .iter()
                .enumerate()
                .map(|(i, h)| (h.clone(), row.get(i).cloned().unwrap_or_default()))
                .collect()
        })
        .collect()
}
