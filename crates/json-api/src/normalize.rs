//! Request Normalizer
//!
//! Merges the JSON body and the query string into one lookup so handlers can
//! read a field without caring where the client put it.

use rustc_hash::FxHashMap;
use salvo::Request;
use serde_json::{Map, Value};
use tracing::debug;

/// Where a logical field may be found, in lookup order.
///
/// Body keys are tried first, then query keys.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Field {
    body: &'static [&'static str],
    query: &'static [&'static str],
}

impl Field {
    /// A field read from the body only.
    pub(crate) const fn body(keys: &'static [&'static str]) -> Self {
        Self { body: keys, query: &[] }
    }

    /// A field read from the query string only.
    pub(crate) const fn query(keys: &'static [&'static str]) -> Self {
        Self { body: &[], query: keys }
    }

    /// A field read from the body, falling back to the query string.
    pub(crate) const fn either(
        body: &'static [&'static str],
        query: &'static [&'static str],
    ) -> Self {
        Self { body, query }
    }
}

/// Body and query parameters of a single request.
#[derive(Debug, Default)]
pub(crate) struct RequestInput {
    body: Map<String, Value>,
    query: FxHashMap<String, String>,
}

impl RequestInput {
    /// Read the request body and query string.
    ///
    /// A body that is missing, not JSON or not a JSON object is treated as
    /// empty.
    pub(crate) async fn read(req: &mut Request) -> Self {
        let query = req
            .queries()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let body = match req.payload().await {
            Ok(bytes) => parse_body(bytes),
            Err(source) => {
                debug!("could not read request body: {source}");

                Map::new()
            }
        };

        Self { body, query }
    }

    #[cfg(test)]
    pub(crate) fn from_parts<'a>(
        body: &[u8],
        query: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            body: parse_body(body),
            query: query
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// First non-blank value of `field`, trimmed.
    pub(crate) fn text(&self, field: &Field) -> Option<String> {
        self.candidates(field)
            .map(str::trim)
            .find(|value| !value.is_empty())
            .map(ToOwned::to_owned)
    }

    /// Like [`RequestInput::text`], with a fallback literal.
    pub(crate) fn text_or(&self, field: &Field, default: &str) -> String {
        self.text(field).unwrap_or_else(|| default.to_string())
    }

    /// Value of a field whose empty form is meaningful.
    ///
    /// Returns `Some("")` when the key is present but blank, and `None`
    /// only when no source carries it at all.
    pub(crate) fn optional_text(&self, field: &Field) -> Option<String> {
        let mut present = false;

        for value in self.candidates(field) {
            present = true;

            let value = value.trim();

            if !value.is_empty() {
                return Some(value.to_string());
            }
        }

        present.then(String::new)
    }

    /// Array under `key` in the body; anything else is empty.
    pub(crate) fn list(&self, key: &str) -> &[Value] {
        self.body
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn candidates<'a>(&'a self, field: &'a Field) -> impl Iterator<Item = &'a str> + 'a {
        let body = field
            .body
            .iter()
            .filter_map(|key| self.body.get(*key).and_then(Value::as_str));

        let query = field
            .query
            .iter()
            .filter_map(|key| self.query.get(*key).map(String::as_str));

        body.chain(query)
    }
}

/// Trimmed string under `key` of a JSON object, if non-blank.
pub(crate) fn object_text(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToOwned::to_owned)
}

fn parse_body(bytes: &[u8]) -> Map<String, Value> {
    match serde_json::from_slice(bytes) {
        Ok(Value::Object(body)) => body,
        Ok(_) | Err(_) => Map::new(),
    }
}
