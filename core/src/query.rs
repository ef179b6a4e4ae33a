//! Query-string encoding for GET requests.

use std::collections::BTreeMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Query parameters. A `BTreeMap` keeps the encoded order stable.
pub type QueryParams = BTreeMap<String, String>;

/// Everything except the URI-component unreserved characters
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single key or value.
pub fn encode_component(data: &str) -> String {
    utf8_percent_encode(data, COMPONENT).to_string()
}

/// Encode `params` as `?k1=v1&k2=v2`. Absent or empty params encode to `""`.
///
/// Keys are percent-encoded with the same rules as values.
pub fn encode_query(params: Option<&QueryParams>) -> String {
    let Some(params) = params.filter(|params| !params.is_empty()) else {
        return String::new();
    };

    let pairs = params
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<String>>()
        .join("&");

    format!("?{pairs}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn absent_params_encode_to_empty() {
        assert_eq!(encode_query(None), "");
    }

    #[test]
    fn empty_params_encode_to_empty() {
        assert_eq!(encode_query(Some(&QueryParams::new())), "");
    }

    #[test]
    fn single_pair() {
        assert_eq!(encode_query(Some(&params(&[("stream", "true")]))), "?stream=true");
    }

    #[test]
    fn pairs_are_sorted_and_joined() {
        let encoded = encode_query(Some(&params(&[("stream", "true"), ("container", "/inertia-daemon")])));
        assert_eq!(encoded, "?container=%2Finertia-daemon&stream=true");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(encode_component("a b&c=d?e#f+g"), "a%20b%26c%3Dd%3Fe%23f%2Bg");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
    }

    #[test]
    fn non_ascii_is_utf8_escaped() {
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn keys_are_escaped_too() {
        assert_eq!(encode_query(Some(&params(&[("a key", "v")]))), "?a%20key=v");
    }
}
