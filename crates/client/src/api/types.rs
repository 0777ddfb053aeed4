//! Wire types for the Fruitstand backend API.
//!
//! Request bodies mirror the backend's JSON shapes exactly; response types
//! are read-only projections the client never reshapes.

use serde::{Deserialize, Serialize};

use fruitstand_core::{AdminCredentials, Email, Price, ProductId};

/// A product as served by the listing endpoint.
///
/// Read-only client-side projection: the client never edits or deletes a
/// product, and every listing fetch fully replaces any prior list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend-assigned identifier.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Units on hand. Admin-facing; the shop view ignores it.
    pub stock: u32,
}

/// Admin-entered fields for creating a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub stock: u32,
}

/// Signup request body.
#[derive(Serialize)]
pub(crate) struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a Email,
    pub password: &'a str,
}

/// Login request body. User and admin logins share the shape.
#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a Email,
    pub password: &'a str,
}

/// Create-product request body: the product plus admin credentials, which
/// the backend re-verifies on every call.
#[derive(Serialize)]
pub(crate) struct CreateProductRequest<'a> {
    pub product: &'a NewProduct,
    pub credentials: &'a AdminCredentials,
}

/// Error body shape: an optional `detail` field carries the human-readable
/// message. Anything else in the body is ignored.
#[derive(Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: Option<String>,
}
