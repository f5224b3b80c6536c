//! Wire DTOs for the bookstore API.
//!
//! # Design
//! Field names follow the backend's JSON (`titre`, `statut`, ...). `Book` is
//! the raw object behind accessors. Order records keep any field they do not
//! name in `extra`, down to nested `client` and `items[]`, and optional fields
//! are skipped when absent, so a parsed value serializes back to the JSON the
//! server sent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Server-assigned order identifier, rendered verbatim into request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub i64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for OrderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Order lifecycle value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Pending payment.
    EnAttente,
    Payee,
    Livree,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [OrderStatus::EnAttente, OrderStatus::Payee, OrderStatus::Livree];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::EnAttente => "en_attente",
            OrderStatus::Payee => "payee",
            OrderStatus::Livree => "livree",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ApiError::InvalidStatus(s.to_string()))
    }
}

/// A catalog entry as listed by `GET /books`.
///
/// Held as the raw JSON object so nullable, missing, or unknown fields all
/// survive untouched; the accessors read the fields the backend documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Book(pub Map<String, Value>);

impl Book {
    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    pub fn titre(&self) -> Option<&str> {
        self.0.get("titre").and_then(Value::as_str)
    }

    pub fn auteur(&self) -> Option<&str> {
        self.0.get("auteur").and_then(Value::as_str)
    }

    pub fn prix_cents(&self) -> Option<i64> {
        self.0.get("prix_cents").and_then(Value::as_i64)
    }

    pub fn disponible(&self) -> Option<bool> {
        self.0.get("disponible").and_then(Value::as_bool)
    }

    /// `None` when the key is absent or `null`.
    pub fn image_url(&self) -> Option<&str> {
        self.0.get("image_url").and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Customer details. `id` is only present on records the server returns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nom: String,
    pub email: String,
    pub adresse: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One cart line of an order payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    pub book_id: i64,
    pub quantite: u32,
}

/// Request payload for `POST /orders`. Sent as-is; the server validates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewOrder {
    pub client: Customer,
    pub items: Vec<CartItem>,
}

/// Request payload for `PUT /orders/{id}/status`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdate {
    pub statut: OrderStatus,
}

/// A priced order line as returned by `GET /orders/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLine {
    pub book_id: i64,
    pub titre: String,
    pub quantite: i64,
    pub prix_unitaire_cents: i64,
    pub ligne_total_cents: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An order as returned by any of the order endpoints.
///
/// Creation returns the amounts, lookup adds `client` and `items`, and a
/// status update returns only `id` and `statut`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub statut: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<Customer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderLine>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sous_total_cents: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxes_cents: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub livraison_cents: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cents: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body the server sends alongside a failure status.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}
