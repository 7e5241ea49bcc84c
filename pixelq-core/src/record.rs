//! Types for recording values observed during training.
//!
//! An update step hands diagnostics back to the caller as a [`Record`],
//! a string-keyed map of loosely typed values. Callers merge records from
//! different sources and forward them to whatever sink they log with.
use crate::error::PixelqError;
use std::collections::{
    hash_map::{IntoIter, Iter, Keys},
    HashMap,
};

/// A value in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// Scalar value.
    Scalar(f32),

    /// String value.
    String(String),
}

/// String-keyed map of [`RecordValue`]s.
#[derive(Debug, Clone, Default)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(slice: &[(K, RecordValue)]) -> Self {
        Self(
            slice
                .iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Inserts a key-value pair, replacing any earlier value under the key.
    pub fn insert(&mut self, key: impl Into<String>, value: RecordValue) {
        self.0.insert(key.into(), value);
    }

    /// Gets the value under the key, if any.
    pub fn get(&self, key: &str) -> Option<&RecordValue> {
        self.0.get(key)
    }

    /// Returns an iterator over key-value pairs.
    pub fn iter(&self) -> Iter<'_, String, RecordValue> {
        self.0.iter()
    }

    /// Returns a consuming iterator over key-value pairs.
    pub fn into_iter_in_record(self) -> IntoIter<String, RecordValue> {
        self.0.into_iter()
    }

    /// Returns an iterator over the keys.
    pub fn keys(&self) -> Keys<'_, String, RecordValue> {
        self.0.keys()
    }

    /// True if the record holds no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merges two records; on a key collision the other record wins.
    pub fn merge(self, other: Record) -> Self {
        Record(self.0.into_iter().chain(other.0).collect())
    }

    /// Gets a scalar value under the key.
    pub fn get_scalar(&self, key: &str) -> Result<f32, PixelqError> {
        match self.0.get(key) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(PixelqError::RecordValueTypeError("Scalar".to_string())),
            None => Err(PixelqError::RecordKeyError(key.to_string())),
        }
    }

    /// Gets a string value under the key.
    pub fn get_string(&self, key: &str) -> Result<String, PixelqError> {
        match self.0.get(key) {
            Some(RecordValue::String(s)) => Ok(s.clone()),
            Some(_) => Err(PixelqError::RecordValueTypeError("String".to_string())),
            None => Err(PixelqError::RecordKeyError(key.to_string())),
        }
    }
}
