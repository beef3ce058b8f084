//! Pagination envelope for list endpoints
//!
//! List endpoints answer `{"data": [...], "list_metadata": {"before", "after"}}`.
//! Each call yields an independent snapshot; cursors are passed back verbatim
//! to fetch the neighbouring page.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::hydrate::{Field, Resource, construct_from_response};

/// Cursors of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMetadata {
    pub before: Option<String>,
    pub after: Option<String>,
}

impl Resource for ListMetadata {
    const RESOURCE_TYPE: &'static str = "list_metadata";
    const FIELDS: &'static [Field] = &[
        Field::optional("before", "before"),
        Field::optional("after", "after"),
    ];
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    pub data: Vec<R>,
    pub list_metadata: ListMetadata,
}

impl<R> Page<R> {
    /// `(before, after, data)`, the shape list operations return.
    pub fn into_parts(self) -> (Option<String>, Option<String>, Vec<R>) {
        (self.list_metadata.before, self.list_metadata.after, self.data)
    }
}

/// Hydrate a pagination envelope whose items are `R`.
pub fn construct_page<R: Resource>(response: &Value) -> Result<Page<R>> {
    let object = response
        .as_object()
        .ok_or_else(|| Error::malformed("list", "expected a JSON object"))?;

    let data = object
        .get("data")
        .ok_or(Error::MissingField {
            resource: "list",
            field: "data",
        })?
        .as_array()
        .ok_or_else(|| Error::malformed("list", "`data` is not an array"))?
        .iter()
        .map(construct_from_response::<R>)
        .collect::<Result<Vec<_>>>()?;

    let list_metadata = match object.get("list_metadata") {
        Some(raw) => construct_from_response::<ListMetadata>(raw)?,
        None => {
            return Err(Error::MissingField {
                resource: "list",
                field: "list_metadata",
            });
        }
    };

    Ok(Page {
        data,
        list_metadata,
    })
}

/// Sort order for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}
