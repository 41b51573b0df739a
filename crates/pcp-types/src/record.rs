use crate::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of production data keyed by field name.
///
/// Records are supplied by the caller per evaluation and only ever read by the
/// rules. Missing and `Null` fields are both treated as empty text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, FieldValue>,
}

impl Record {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion of a field
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Raw access to a field
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Text of a field; absent or `Null` gives the empty string
    #[must_use]
    pub fn text(&self, field: &str) -> String {
        self.get(field).map(FieldValue::as_text).unwrap_or_default()
    }

    /// Lower-cased text of a field, as used for keyword matching
    #[must_use]
    pub fn lowercase_text(&self, field: &str) -> String {
        self.text(field).to_lowercase()
    }

    /// Number of fields in the record
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record carries no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl TryFrom<&serde_json::Value> for Record {
    type Error = anyhow::Error;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        let serde_json::Value::Object(map) = value else {
            return Err(anyhow::anyhow!("A record must be a JSON object, got: {}", value));
        };
        let mut fields = HashMap::with_capacity(map.len());
        for (k, v) in map {
            fields.insert(k.clone(), FieldValue::try_from(v)?);
        }
        Ok(Self { fields })
    }
}
