//! Query-string encoding for GET payloads.

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::Error;

/// Flattens a serializable payload into `key=value` pairs.
///
/// The payload must serialize to a JSON object. Field names come from the
/// serde attributes on the payload type; `null` fields are omitted, arrays
/// become repeated keys, and nested objects are sent as compact JSON.
pub fn to_query_pairs<P: Serialize + ?Sized>(payload: &P) -> Result<Vec<(String, String)>, Error> {
    let value = serde_json::to_value(payload).map_err(|e| Error::Encoding(e.to_string()))?;
    let map = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => {
            return Err(Error::Encoding(format!(
                "query payload must be an object, got {}",
                kind(&other)
            )))
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    if let Some(s) = scalar(item) {
                        pairs.push((key.clone(), s));
                    }
                }
            }
            other => {
                if let Some(s) = scalar(other) {
                    pairs.push((key, s));
                }
            }
        }
    }
    Ok(pairs)
}

/// Appends the pairs to the URL, returning the modified URL.
pub fn add_to_url(url: &Url, pairs: &[(String, String)]) -> Url {
    let mut url = url.clone();
    if pairs.is_empty() {
        return url;
    }
    url.query_pairs_mut()
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    url
}

fn scalar(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        nested => Some(nested.to_string()),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
