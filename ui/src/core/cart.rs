//! Client for the storefront's AJAX cart-add endpoint.
//!
//! Wire contract (owned by the commerce platform):
//! - `POST <endpoint>` with `{"id": "<variant id>", "quantity": <n>}`.
//! - The reply is always JSON. A line item carrying an `id` means the item was
//!   added; anything else is a rejection (`{"status", "message", "description"}`).
//!
//! The HTTP status is not consulted; only the body decides.

use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::catalog::Edition;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartAddRequest {
    pub id: String,
    pub quantity: u32,
}

impl CartAddRequest {
    pub fn for_edition(edition: Edition, quantity: u32) -> Self {
        Self {
            id: edition.variant_id().to_string(),
            quantity,
        }
    }
}

/// The subset of the returned line item we care about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartLine {
    pub id: String,
    pub variant_id: Option<u64>,
    pub quantity: Option<u64>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("network error: {0}")]
    Network(String),
    #[error("cart response was not JSON: {0}")]
    Decode(String),
    #[error(
        "cart rejected the item: {}",
        .description.as_deref().unwrap_or("no details given")
    )]
    Rejected {
        status: Option<u64>,
        description: Option<String>,
    },
    #[error("cart requests are only available in the browser")]
    Unsupported,
}

impl CartError {
    /// Whether the platform answered but refused the item.
    pub fn is_rejection(&self) -> bool {
        matches!(self, CartError::Rejected { .. })
    }
}

/// Seam between the checkout flow and the transport.
pub trait CartApi {
    fn add(&self, request: &CartAddRequest) -> impl Future<Output = Result<CartLine, CartError>>;
}

/// Parse a raw response body.
pub fn parse_response(body: &str) -> Result<CartLine, CartError> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| CartError::Decode(err.to_string()))?;
    interpret_response(&value)
}

/// Decide success from a decoded response body. A `null` body has no fields
/// to inspect and counts as a broken reply, not a rejection.
pub fn interpret_response(value: &Value) -> Result<CartLine, CartError> {
    if value.is_null() {
        return Err(CartError::Decode("response body was null".into()));
    }
    match value.get("id").filter(|id| is_truthy(id)) {
        Some(id) => Ok(CartLine {
            id: match id {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
            variant_id: value.get("variant_id").and_then(Value::as_u64),
            quantity: value.get("quantity").and_then(Value::as_u64),
            title: value.get("title").and_then(Value::as_str).map(str::to_string),
        }),
        None => Err(CartError::Rejected {
            status: value.get("status").and_then(Value::as_u64),
            description: value
                .get("description")
                .or_else(|| value.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string),
        }),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The real storefront, reached from the shop's own origin.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontCart {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    endpoint: String,
}

impl StorefrontCart {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn post(&self, request: &CartAddRequest) -> Result<CartLine, CartError> {
        use gloo_net::http::Request;

        let response = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(request)
            .map_err(|err| CartError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| CartError::Network(err.to_string()))?;
        tracing::debug!(status = response.status(), "cart endpoint replied");
        let body = response
            .text()
            .await
            .map_err(|err| CartError::Network(err.to_string()))?;
        parse_response(&body)
    }
}

impl CartApi for StorefrontCart {
    async fn add(&self, request: &CartAddRequest) -> Result<CartLine, CartError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.post(request).await
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::warn!(variant = %request.id, "cart add attempted off the web target");
            Err(CartError::Unsupported)
        }
    }
}
