//! Wishlist Client - HTTP client and form controller for the Wishlist API
//!
//! Provides network-based HTTP calls to the wishlist REST resource and the
//! form-sync controller that keeps a single form in step with it.

pub mod config;
pub mod error;
pub mod form;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use form::{FormController, FormState};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::{CustomerCountQuery, WishlistQuery};
pub use shared::{ErrorResponse, Item, ItemCreate, Wishlist, WishlistCreate, WishlistUpdate};
