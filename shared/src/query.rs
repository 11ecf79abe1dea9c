//! Query parameter types
//!
//! Typed builders for the search and count query strings. A field left
//! blank on the form is omitted from the query string entirely; the service
//! must never see `name=` with an empty value.

use serde::{Deserialize, Serialize};

/// Search filter for `GET /wishlists`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WishlistQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl WishlistQuery {
    /// Build a filter from raw form text. Blank fields are dropped.
    pub fn from_form(name: &str, email: &str) -> Self {
        Self {
            name: non_blank(name),
            email: non_blank(email),
        }
    }

    /// Filter by wishlist name
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: None,
        }
    }

    /// Filter by customer email
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            name: None,
            email: Some(email.into()),
        }
    }

    /// Key/value pairs in wire order (`name` before `email`)
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", name.as_str()));
        }
        if let Some(email) = &self.email {
            pairs.push(("email", email.as_str()));
        }
        pairs
    }
}

/// Count filter for `GET /wishlists?customer_email=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerCountQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
}

impl CustomerCountQuery {
    /// Build a filter from raw form text. A blank field is dropped.
    pub fn from_form(customer_email: &str) -> Self {
        Self {
            customer_email: non_blank(customer_email),
        }
    }

    /// Key/value pairs in wire order
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        match &self.customer_email {
            Some(email) => vec![("customer_email", email.as_str())],
            None => Vec::new(),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
