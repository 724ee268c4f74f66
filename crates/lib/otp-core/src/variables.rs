//! GraphQL variables with unset entries removed.

use otp_schema::queries::QueryDocument;
use serde::Serialize;
use serde::ser::Error as _;
use serde_json::{Map, Value};

/// Variables object sent alongside a query document.
///
/// Never holds a `null` entry: unset optional inputs are absent rather than
/// transmitted as placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Variables(Map<String, Value>);

impl Variables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes `value` into a variables object, dropping unset entries.
    ///
    /// # Errors
    /// Returns an error if `value` does not serialize to a JSON object.
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(serde_json::Error::custom(format!(
                "query variables must serialize to an object, got {other}"
            ))),
        }
    }

    /// Builds variables from an existing map, dropping unset entries.
    #[must_use]
    pub fn from_map(mut map: Map<String, Value>) -> Self {
        map.retain(|_, value| !value.is_null());
        Self(map)
    }

    /// Inserts `value` under `key`; a `null` value removes the key instead.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        match value.into() {
            Value::Null => {
                self.0.remove(&key);
            }
            value => {
                self.0.insert(key, value);
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Checks these variables against the slots `query` declares.
    ///
    /// # Errors
    /// Returns a description of the first undeclared key or missing
    /// non-null slot.
    pub fn check_against(&self, query: &QueryDocument) -> Result<(), String> {
        if let Some(key) = self.0.keys().find(|key| query.slot(key).is_none()) {
            return Err(format!(
                "{} does not declare variable ${key}",
                query.operation_name
            ));
        }
        if let Some(name) = query.required_slots().find(|name| !self.0.contains_key(*name)) {
            return Err(format!(
                "{} requires variable ${name}",
                query.operation_name
            ));
        }
        Ok(())
    }
}
