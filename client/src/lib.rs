//! Async host and configuration for the bookstore API client.
//!
//! `bookstore-core` builds requests and parses responses; this crate
//! performs the round-trips with `reqwest`, loads layered settings, and sets
//! up `tracing` for the `bookstore` binary.

pub mod api;
pub mod settings;
pub mod telemetry;

pub use api::BookstoreApi;
pub use settings::{ApiSettings, LogFormat, LogSettings, Settings};
