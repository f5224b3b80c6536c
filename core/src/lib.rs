//! Synchronous API client core for the bookstore service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `BookstoreClient` is stateless: a base address and a flag.
//! - Each of the four operations is split into `build_*` (produces request)
//!   and `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Every failure status becomes `ApiError::Request`, whose message is the
//!   server's `message` when it sent one, or a fixed per-operation fallback.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{BookstoreClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Book, CartItem, Customer, ErrorResponse, NewOrder, Order, OrderId, OrderLine, OrderStatus, StatusUpdate};
