//! Composite Key Module
//!
//! Builds the canonical cache key from a resource type and query parameters.
//!
//! Keys have the shape `resource + "_" + canonical_json(params)`. Parameters
//! live in a `BTreeMap`, so serialization order is alphabetical by parameter
//! name and two logically identical parameter sets always produce the same
//! key regardless of insertion order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CacheError, Result};

// == Params ==
/// Query parameters attached to a resource fetch.
///
/// Values must be primitive JSON (null, bool, number, string). Arrays and
/// objects are rejected when the key is built; they have no canonical
/// single-line form the invalidation paths could match against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, Value>);

impl Params {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    ///
    /// # Example
    /// ```
    /// use dashcache::key::Params;
    ///
    /// let params = Params::new().with("page", 1).with("search", "chair");
    /// assert_eq!(params.len(), 2);
    /// ```
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a parameter, replacing any existing value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns the value for a parameter name, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over parameters in canonical (alphabetical) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Rejects parameters whose values are not primitive JSON.
    fn validate(&self) -> Result<()> {
        for (name, value) in &self.0 {
            match value {
                Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
                Value::Array(_) => {
                    return Err(CacheError::InvalidParam {
                        name: name.clone(),
                        reason: "arrays are not primitive".to_string(),
                    })
                }
                Value::Object(_) => {
                    return Err(CacheError::InvalidParam {
                        name: name.clone(),
                        reason: "nested objects are not primitive".to_string(),
                    })
                }
            }
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// == Key Builder ==
/// Builds the canonical composite key for `(resource, params)`.
///
/// Equal inputs always yield equal output; an empty parameter set still
/// produces a valid, per-resource-distinct key (`products_{}`).
///
/// Resource validity is the registry's concern, not this function's.
pub fn cache_key(resource: &str, params: &Params) -> Result<String> {
    params.validate()?;

    // A map of validated primitives cannot fail to serialize.
    let canonical =
        serde_json::to_string(&params.0).expect("primitive parameter map serializes infallibly");

    Ok(format!("{}_{}", resource, canonical))
}

/// The prefix matched by prefix invalidation for a resource type.
pub fn key_prefix(resource: &str) -> String {
    format!("{}_", resource)
}
