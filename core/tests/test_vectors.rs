//! Verify request building against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector names an operation, its inputs and the exact request it must
//! produce. Bodies are compared as raw strings because key order is part of
//! the login contract.

use inertia_client::{encode_query, request, Credentials, HttpMethod, HttpRequest, QueryParams};

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

fn build(case: &serde_json::Value) -> HttpRequest {
    let input = &case["input"];
    match case["operation"].as_str().unwrap() {
        "logout" => request::logout(),
        "login" => request::login(
            input["username"].as_str().unwrap(),
            input["password"].as_str().unwrap(),
        ),
        "validate" => request::validate(),
        "container_logs" => request::container_logs(input["container"].as_str()),
        "remote_status" => request::remote_status(),
        other => panic!("unknown operation: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        let req = build(case);
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url, expected_req["url"].as_str().unwrap(), "{name}: url");
        assert_eq!(req.credentials, Credentials::Include, "{name}: credentials");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        assert_eq!(req.body.as_deref(), expected_req["body"].as_str(), "{name}: body");
    }
}

// ---------------------------------------------------------------------------
// Query encoding
// ---------------------------------------------------------------------------

#[test]
fn query_test_vectors() {
    let raw = include_str!("../../test-vectors/query.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let params: Option<QueryParams> = serde_json::from_value(case["params"].clone()).unwrap();

        let encoded = encode_query(params.as_ref());
        assert_eq!(encoded, case["expected"].as_str().unwrap(), "{name}: encoded");

        let req = request::get("/endpoint", Default::default(), params.as_ref());
        assert_eq!(req.url, format!("/endpoint{encoded}"), "{name}: url");
    }
}
