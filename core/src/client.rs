//! Stateless HTTP request builder and response parser for the bookstore API.
//!
//! # Design
//! `BookstoreClient` holds only its base address and one behavior flag, and
//! carries no mutable state between calls. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. The caller executes the actual round-trip.
//!
//! Order responses are parsed as JSON before the status is inspected, so a
//! failure can carry the server's `message`. Book listing failures report a
//! fixed message unless `with_server_list_errors` is enabled.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Book, ErrorResponse, NewOrder, Order, OrderId, OrderStatus, StatusUpdate};

/// Base address the bookstore backend listens on by default.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

pub const LIST_BOOKS_FAILED: &str = "book list load failed";
pub const CREATE_ORDER_FAILED: &str = "order creation failed";
pub const ORDER_NOT_FOUND: &str = "order not found";
pub const UPDATE_STATUS_FAILED: &str = "status update failed";

/// Synchronous, stateless client for the bookstore API.
#[derive(Debug, Clone)]
pub struct BookstoreClient {
    base_url: String,
    server_list_errors: bool,
}

impl Default for BookstoreClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl BookstoreClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            server_list_errors: false,
        }
    }

    /// Report the server's `message` for failed book listings too, instead
    /// of the fixed fallback.
    pub fn with_server_list_errors(mut self, enabled: bool) -> Self {
        self.server_list_errors = enabled;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `search` is trimmed; only a non-blank term becomes a `search` query
    /// parameter.
    pub fn build_list_books(&self, search: Option<&str>) -> Result<HttpRequest, ApiError> {
        let mut url = self.endpoint("/books")?;
        if let Some(term) = search.map(str::trim).filter(|term| !term.is_empty()) {
            url.query_pairs_mut().append_pair("search", term);
        }
        tracing::debug!(url = %url, "built book list request");
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_create_order(&self, payload: &NewOrder) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "/orders".to_string(), payload)
    }

    pub fn build_get_order(&self, id: OrderId) -> Result<HttpRequest, ApiError> {
        let url = self.endpoint(&format!("/orders/{id}"))?;
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_update_order_status(&self, id: OrderId, status: OrderStatus) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, format!("/orders/{id}/status"), &StatusUpdate { statut: status })
    }

    pub fn parse_list_books(&self, response: HttpResponse) -> Result<Vec<Book>, ApiError> {
        if !response.is_success() {
            let message = if self.server_list_errors {
                let body = serde_json::from_str::<Value>(&response.body).ok();
                server_message(body.as_ref())
            } else {
                None
            };
            return Err(request_error(response.status, message, LIST_BOOKS_FAILED));
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_create_order(&self, response: HttpResponse) -> Result<Order, ApiError> {
        parse_json_reply(response, CREATE_ORDER_FAILED)
    }

    pub fn parse_get_order(&self, response: HttpResponse) -> Result<Order, ApiError> {
        parse_json_reply(response, ORDER_NOT_FOUND)
    }

    pub fn parse_update_order_status(&self, response: HttpResponse) -> Result<Order, ApiError> {
        parse_json_reply(response, UPDATE_STATUS_FAILED)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{path}", self.base_url);
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))
    }

    fn json_request<T: Serialize>(&self, method: HttpMethod, path: String, payload: &T) -> Result<HttpRequest, ApiError> {
        let url = self.endpoint(&path)?;
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        tracing::debug!(%method, url = %url, "built json request");
        Ok(HttpRequest {
            method,
            url: url.into(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Parse the body first, then branch on status.
fn parse_json_reply<T: DeserializeOwned>(response: HttpResponse, fallback: &str) -> Result<T, ApiError> {
    let parsed = serde_json::from_str::<Value>(&response.body);
    if !response.is_success() {
        return Err(request_error(response.status, server_message(parsed.as_ref().ok()), fallback));
    }
    let value = parsed.map_err(|e| ApiError::Deserialization(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// The non-empty `message` string of a JSON error body, if any.
fn server_message(body: Option<&Value>) -> Option<String> {
    let body: ErrorResponse = serde_json::from_value(body?.clone()).ok()?;
    body.message.filter(|message| !message.is_empty())
}

fn request_error(status: u16, message: Option<String>, fallback: &str) -> ApiError {
    let message = message.unwrap_or_else(|| fallback.to_string());
    tracing::warn!(status, %message, "bookstore request failed");
    ApiError::Request { status, message }
}
