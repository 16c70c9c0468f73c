//! Output card records.
//!
//! A [`Card`] keeps its fields in input header order and serializes as a flat
//! JSON object. Array columns hold [`FieldValue::List`]; everything else is a
//! scalar copied from the source cell.

use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};

/// Value stored under one card key.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    List(Vec<String>),
}

impl FieldValue {
    pub fn empty_text() -> Self {
        Self::Text(String::new())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Text(value) => serializer.serialize_str(value),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Float(value) if value.is_finite() => serializer.serialize_f64(*value),
            // serde_json would silently emit `null` here.
            Self::Float(value) => Err(S::Error::custom(format!(
                "non-finite number {value} has no JSON representation"
            ))),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::List(values) => values.serialize(serializer),
        }
    }
}

/// One normalized output record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Card {
    fields: Vec<(String, FieldValue)>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Set a field. A repeated key replaces the earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        let key = key.into();
        if let Some(slot) = self.fields.iter_mut().find(|(name, _)| *name == key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
