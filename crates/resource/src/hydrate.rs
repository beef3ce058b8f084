//! Table-driven hydration
//!
//! Hydration copies each response key listed in `Resource::FIELDS` to its
//! attribute name, runs the `Resource::NESTED` hooks, and lets serde build the
//! typed struct from the resulting camelCase map. Keys missing from the table
//! are ignored. A required key that is absent or `null` fails with
//! `Error::MissingField`; an optional one leaves the attribute unset.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// One row of a rename table: response key → attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub response_key: &'static str,
    pub attribute: &'static str,
    pub required: bool,
}

impl Field {
    pub const fn required(response_key: &'static str, attribute: &'static str) -> Self {
        Self {
            response_key,
            attribute,
            required: true,
        }
    }

    pub const fn optional(response_key: &'static str, attribute: &'static str) -> Self {
        Self {
            response_key,
            attribute,
            required: false,
        }
    }
}

/// Hook hydrating a nested child value (object or array of objects) into its
/// attribute mapping.
#[derive(Clone, Copy)]
pub struct Nested {
    pub response_key: &'static str,
    pub attribute: &'static str,
    pub required: bool,
    pub hydrate: fn(&Value) -> Result<Value>,
}

/// A typed representation of one JSON object returned by the API.
///
/// The serde representation of implementors must use the attribute names of
/// `FIELDS` and `NESTED` (`#[serde(rename_all = "camelCase")]`).
pub trait Resource: Serialize + DeserializeOwned {
    /// Name used in error messages.
    const RESOURCE_TYPE: &'static str;

    /// Response key → attribute rename table.
    const FIELDS: &'static [Field];

    /// Child resources hydrated recursively.
    const NESTED: &'static [Nested] = &[];

    /// Attribute map of this resource, the inverse of hydration.
    fn to_mapping(&self) -> Value {
        // Resources hold only strings, bools and JSON values, which always serialize
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Hydrate `R` from a raw response object.
pub fn construct_from_response<R: Resource>(response: &Value) -> Result<R> {
    let object = response
        .as_object()
        .ok_or_else(|| Error::malformed(R::RESOURCE_TYPE, "expected a JSON object"))?;

    let mut attributes = Map::new();
    for field in R::FIELDS {
        match present(object, field.response_key) {
            Some(value) => {
                attributes.insert(field.attribute.to_string(), value.clone());
            }
            None if field.required => {
                return Err(Error::MissingField {
                    resource: R::RESOURCE_TYPE,
                    field: field.response_key,
                });
            }
            None => {}
        }
    }

    for nested in R::NESTED {
        match present(object, nested.response_key) {
            Some(value) => {
                attributes.insert(nested.attribute.to_string(), (nested.hydrate)(value)?);
            }
            None if nested.required => {
                return Err(Error::MissingField {
                    resource: R::RESOURCE_TYPE,
                    field: nested.response_key,
                });
            }
            None => {}
        }
    }

    serde_json::from_value(Value::Object(attributes))
        .map_err(|e| Error::malformed(R::RESOURCE_TYPE, e.to_string()))
}

/// Nested hook for a single child resource.
pub fn hydrate_one<R: Resource>(raw: &Value) -> Result<Value> {
    construct_from_response::<R>(raw).map(|child| child.to_mapping())
}

/// Nested hook for an array of child resources, hydrated element-wise.
pub fn hydrate_collection<R: Resource>(raw: &Value) -> Result<Value> {
    let items = raw
        .as_array()
        .ok_or_else(|| Error::malformed(R::RESOURCE_TYPE, "expected a JSON array"))?;
    items
        .iter()
        .map(hydrate_one::<R>)
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

fn present<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}
