//! Query string decoding.

use std::collections::BTreeMap;

/// Decodes an `application/x-www-form-urlencoded` query into a key/value map.
///
/// A repeated key keeps its last value. A key without `=` maps to `""`.
/// Malformed percent sequences are kept as written. Pairs with an empty key
/// are dropped.
pub(super) fn decode_parameters(query: &str) -> BTreeMap<String, String> {
    url::form_urlencoded::parse(query.as_bytes())
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
