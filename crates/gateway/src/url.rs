//! URL construction
//!
//! Builds `scheme://host/path?query` from the configured base URL. Query
//! strings use `application/x-www-form-urlencoded` escaping, keys appear in
//! sorted order, null values are dropped and
//! arrays expand to repeated keys (`domains=a.com&domains=b.com`).
//!
//! Ids interpolated into paths go through `path_segment` so they can never
//! add segments, a query or a fragment to the request URL.

use std::borrow::Cow;

use reqwest::Url;
use serde_json::Value;

use crate::Params;
use crate::error::{Error, Result};

/// Resolve `path` against `base_url`, keeping any path prefix on the base.
pub fn endpoint_url(base_url: &str, path: &str) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| Error::InvalidUrl(format!("{joined}: {e}")))
}

/// Percent-encode `id` for use as one path segment.
///
/// Empty, `.` and `..` are rejected: URL parsing resolves dot segments even
/// when percent-encoded, and an empty id would address the parent collection.
pub fn path_segment(id: &str) -> Result<Cow<'_, str>> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(Error::InvalidPathSegment(id.to_owned()));
    }
    Ok(urlencoding::encode(id))
}

/// Build a fully qualified URL with query parameters. Pure: no network I/O.
pub fn generate_url(base_url: &str, path: &str, params: &Params) -> Result<String> {
    let mut url = endpoint_url(base_url, path)?;
    append_query(&mut url, params);
    Ok(url.to_string())
}

/// Append `params` to the query string of `url`.
pub(crate) fn append_query(url: &mut Url, params: &Params) {
    let pairs = query_pairs(params);
    // query_pairs_mut() leaves a dangling `?` when nothing is appended
    if pairs.is_empty() {
        return;
    }
    url.query_pairs_mut()
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
}

/// Flatten params into string pairs for query strings and form bodies.
pub(crate) fn query_pairs(params: &Params) -> Vec<(String, String)> {
    let mut entries: Vec<(&String, &Value)> = params.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut pairs = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = scalar_text(item) {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = scalar_text(other) {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }
    pairs
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        nested => Some(nested.to_string()),
    }
}
