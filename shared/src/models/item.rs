//! Item Model
//!
//! Items are a sub-resource of a wishlist and always belong to exactly one.

use serde::{Deserialize, Serialize};

/// Item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub wishlist_id: i64,
    pub name: String,
    pub sku: String,
    pub description: String,
    pub quantity: u32,
}

/// Create item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCreate {
    pub name: String,
    pub sku: String,
    pub description: String,
    pub quantity: u32,
}
