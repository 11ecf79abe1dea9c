//! Shared wire types for the wishlist service
//!
//! Common types used in API communication between the wishlist service and
//! its clients: resource models, query parameters, and response bodies.

pub mod models;
pub mod query;
pub mod response;

// Re-exports
pub use models::{Item, ItemCreate, Wishlist, WishlistCreate, WishlistUpdate};
pub use query::{CustomerCountQuery, WishlistQuery};
pub use response::ErrorResponse;
