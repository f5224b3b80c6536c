//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and either the expected parse result or the expected error message.
//! Results are compared as JSON values, which also checks that a parsed
//! record serializes back to exactly what the server sent.

use bookstore_core::{ApiError, BookstoreClient, HttpMethod, HttpRequest, HttpResponse, NewOrder, OrderId, OrderStatus};
use serde::Serialize;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:5000";

fn client() -> BookstoreClient {
    BookstoreClient::new(BASE_URL)
}

fn load(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        other => panic!("unknown method: {other}"),
    }
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    )
}

fn check_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.url, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: url");

    let expected_headers: Vec<(String, String)> = expected["headers"]
        .as_array()
        .map(|headers| {
            headers
                .iter()
                .map(|h| {
                    let arr = h.as_array().unwrap();
                    (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
                })
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(req.headers, expected_headers, "{name}: headers");

    match expected.get("body") {
        Some(body) => {
            let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn check_outcome<T: Serialize + std::fmt::Debug>(name: &str, case: &Value, result: Result<T, ApiError>) {
    if let Some(expected_error) = case.get("expected_error") {
        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::Request { .. }), "{name}: expected Request error, got {err:?}");
        assert_eq!(err.to_string(), expected_error.as_str().unwrap(), "{name}: message");
    } else {
        let value = serde_json::to_value(result.unwrap()).unwrap();
        assert_eq!(value, case["expected_result"], "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// List books
// ---------------------------------------------------------------------------

#[test]
fn list_books_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/list_books.json")) {
        let name = case["name"].as_str().unwrap();
        let search = case["search"].as_str();

        let req = c.build_list_books(search).unwrap();
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_list_books(simulated_response(&case));
        check_outcome(name, &case, result);
    }
}

// ---------------------------------------------------------------------------
// Create order
// ---------------------------------------------------------------------------

#[test]
fn create_order_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/create_order.json")) {
        let name = case["name"].as_str().unwrap();
        let input: NewOrder = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_create_order(&input).unwrap();
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_create_order(simulated_response(&case));
        check_outcome(name, &case, result);
    }
}

// ---------------------------------------------------------------------------
// Get order
// ---------------------------------------------------------------------------

#[test]
fn get_order_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/get_order.json")) {
        let name = case["name"].as_str().unwrap();
        let id = OrderId(case["input_id"].as_i64().unwrap());

        let req = c.build_get_order(id).unwrap();
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_get_order(simulated_response(&case));
        check_outcome(name, &case, result);
    }
}

// ---------------------------------------------------------------------------
// Update order status
// ---------------------------------------------------------------------------

#[test]
fn update_status_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/update_status.json")) {
        let name = case["name"].as_str().unwrap();
        let id = OrderId(case["input_id"].as_i64().unwrap());
        let status: OrderStatus = case["input_status"].as_str().unwrap().parse().unwrap();

        let req = c.build_update_order_status(id, status).unwrap();
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_update_order_status(simulated_response(&case));
        check_outcome(name, &case, result);
    }
}
