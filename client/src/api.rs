//! Async host for the bookstore core.
//!
//! # Design
//! `BookstoreApi` pairs a `reqwest::Client` with a `BookstoreClient`. Each
//! operation builds its request with the core, executes it here, and hands
//! the response back to the core for parsing. HTTP error statuses come back
//! as data; only a failure to get a response at all becomes
//! `ApiError::Transport`. Calls share nothing but reqwest's connection pool.

use bookstore_core::{
    ApiError, Book, BookstoreClient, HttpMethod, HttpRequest, HttpResponse, NewOrder, Order, OrderId, OrderStatus,
};

use crate::settings::ApiSettings;

#[derive(Debug, Clone)]
pub struct BookstoreApi {
    http: reqwest::Client,
    client: BookstoreClient,
}

impl BookstoreApi {
    /// No timeout; a call can be abandoned by dropping its future.
    pub fn new(client: BookstoreClient) -> Self {
        Self {
            http: reqwest::Client::new(),
            client,
        }
    }

    pub fn from_settings(settings: &ApiSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(transport)?;
        let client = BookstoreClient::new(&settings.base_url).with_server_list_errors(settings.surface_list_errors);
        Ok(Self { http, client })
    }

    pub fn client(&self) -> &BookstoreClient {
        &self.client
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_books(&self, search: Option<&str>) -> Result<Vec<Book>, ApiError> {
        let request = self.client.build_list_books(search)?;
        let response = self.execute(request).await?;
        self.client.parse_list_books(response)
    }

    #[tracing::instrument(skip_all, fields(items = payload.items.len()))]
    pub async fn create_order(&self, payload: &NewOrder) -> Result<Order, ApiError> {
        let request = self.client.build_create_order(payload)?;
        let response = self.execute(request).await?;
        self.client.parse_create_order(response)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, ApiError> {
        let request = self.client.build_get_order(id)?;
        let response = self.execute(request).await?;
        self.client.parse_get_order(response)
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_order_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, ApiError> {
        let request = self.client.build_update_order_status(id, status)?;
        let response = self.execute(request).await?;
        self.client.parse_update_order_status(response)
    }

    /// Perform one round-trip for a request built by the core.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
        };
        let mut builder = self.http.request(method, request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
            .collect();
        let body = response.text().await.map_err(transport)?;
        tracing::debug!(status, bytes = body.len(), "response received");

        Ok(HttpResponse { status, headers, body })
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}
