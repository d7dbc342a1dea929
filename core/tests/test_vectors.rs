//! Verify build and parse steps against JSON test vectors in `test-vectors/`.
//!
//! Each vector describes an operation, the expected request, a simulated
//! response, and either the expected envelope or the expected error kind.
//! Bodies are compared as parsed JSON so field order does not matter.

use posts_core::{ErrorKind, HttpMethod, HttpRequest, HttpResponse, PostPayload, PostsClient};

const BASE_URL: &str = "https://jsonplaceholder.typicode.com";

fn client() -> PostsClient {
    PostsClient::new(BASE_URL)
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn parse_kind(s: &str) -> ErrorKind {
    match s {
        "Network" => ErrorKind::Network,
        "HttpStatus" => ErrorKind::HttpStatus,
        "Decode" => ErrorKind::Decode,
        "Encode" => ErrorKind::Encode,
        other => panic!("unknown error kind: {other}"),
    }
}

fn build(c: &PostsClient, case: &serde_json::Value) -> HttpRequest {
    let id = || case["input_id"].as_u64().unwrap();
    let input = || -> PostPayload { serde_json::from_value(case["input"].clone()).unwrap() };
    match case["operation"].as_str().unwrap() {
        "list" => c.build_list_posts(),
        "get" => c.build_get_post(id()),
        "comments" => c.build_post_comments(id()),
        "create" => c.build_create_post(&input()).unwrap(),
        "update" => c.build_update_post(id(), &input()).unwrap(),
        "delete" => c.build_delete_post(id()),
        other => panic!("unknown operation: {other}"),
    }
}

fn run_vectors(raw: &str) {
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = build(&c, case);
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");

        if let Some(headers) = expected_req.get("headers") {
            let expected_headers: Vec<(String, String)> = headers
                .as_array()
                .unwrap()
                .iter()
                .map(|h| {
                    let arr = h.as_array().unwrap();
                    (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
                })
                .collect();
            assert_eq!(req.headers, expected_headers, "{name}: headers");
        }

        match expected_req.get("body") {
            Some(expected_body) => {
                let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
                assert_eq!(&req_body, expected_body, "{name}: body");
            }
            None => assert!(req.body.is_none(), "{name}: body should be None"),
        }

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        };
        let raw_body = response.body.clone();
        let result = c.parse_envelope(response);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            assert_eq!(err.kind(), parse_kind(expected_error.as_str().unwrap()), "{name}: error kind");
        } else {
            let env = result.unwrap();
            assert_eq!(env.status as u64, case["expected_status"].as_u64().unwrap(), "{name}: status");
            assert_eq!(env.body, case["expected_body"], "{name}: body");
            assert_eq!(env.text, raw_body, "{name}: raw text");
        }
    }
}

#[test]
fn read_test_vectors() {
    run_vectors(include_str!("../../test-vectors/read.json"));
}

#[test]
fn write_test_vectors() {
    run_vectors(include_str!("../../test-vectors/write.json"));
}
