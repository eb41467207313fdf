//! Test data records
//!
//! A [`DataRecord`] is the flat key→value mapping a resolved dataset
//! produces. It is created fresh per test invocation and discarded after
//! the test; it may legitimately carry keys the page mapping does not
//! declare, and vice versa.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::common::{Error, Result};

/// A single field value from a dataset
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean, used for checkbox state and custom-action triggers
    Flag(bool),
    /// Integer, rendered as text when a textual field consumes it
    Int(i64),
    /// Plain text
    Text(String),
    /// List of strings, used for multi-file attachments
    List(Vec<String>),
}

impl FieldValue {
    /// Render the value as the text a textual interaction should enter
    pub fn to_text(&self) -> String {
        match self {
            Self::Flag(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Text(s) => s.clone(),
            Self::List(items) => items.join(", "),
        }
    }

    /// Truthiness used for checkbox state and custom-action triggers
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Text(s) => !s.is_empty(),
            Self::List(items) => !items.is_empty(),
        }
    }

    /// Interpret the value as one or more file paths
    ///
    /// `key` names the field in the error when the value is not path-like.
    pub fn as_paths(&self, key: &str) -> Result<Vec<PathBuf>> {
        match self {
            Self::Text(path) => Ok(vec![PathBuf::from(path)]),
            Self::List(paths) => Ok(paths.iter().map(PathBuf::from).collect()),
            Self::Flag(_) | Self::Int(_) => Err(Error::InvalidFieldValue {
                key: key.to_string(),
                expected: "a file path or a list of file paths".to_string(),
            }),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Flat key→value mapping produced by the test data resolver
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct DataRecord {
    fields: HashMap<String, FieldValue>,
}

impl DataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for DataRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
