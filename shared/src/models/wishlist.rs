//! Wishlist Model

use serde::{Deserialize, Serialize};

/// Wishlist entity
///
/// `id` is assigned by the service on create; clients never invent one.
/// The `shared_with*` fields ride along on reads and are omitted from the
/// wire when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wishlist {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_with1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_with2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_with3: Option<String>,
}

/// Create wishlist payload
///
/// The only fields a write ever carries. The id travels as a path segment,
/// never in a body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistCreate {
    pub name: String,
    pub email: String,
}

/// Update wishlist payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistUpdate {
    pub name: String,
    pub email: String,
}
