//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{
    CustomerCountQuery, ErrorResponse, Item, ItemCreate, Wishlist, WishlistCreate, WishlistQuery,
    WishlistUpdate,
};

/// HTTP client for making network requests to the wishlist service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters
    async fn get_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request, ignoring any response body
    async fn delete_empty(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::check_status(response).await.map(|_| ())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Pass 2xx responses through; map anything else to an `Api` error.
    ///
    /// The flash message comes from the `{message}` body when it parses,
    /// then the raw body text, then the status reason for an empty body.
    async fn check_status(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(err) => err.message,
            Err(_) if !body.trim().is_empty() => body,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Server error")
                .to_string(),
        };

        tracing::debug!("Request failed with {}: {}", status, message);
        Err(ClientError::Api { status, message })
    }

    // ========== Wishlist API ==========

    /// Create a wishlist. `POST /wishlists`
    pub async fn create(&self, payload: &WishlistCreate) -> ClientResult<Wishlist> {
        self.post("wishlists", payload).await
    }

    /// Update an existing wishlist. `PUT /wishlists/{id}`
    pub async fn update(&self, id: &str, payload: &WishlistUpdate) -> ClientResult<Wishlist> {
        self.put(&format!("wishlists/{}", id), payload).await
    }

    /// Retrieve a single wishlist. `GET /wishlists/{id}`
    pub async fn retrieve(&self, id: &str) -> ClientResult<Wishlist> {
        self.get(&format!("wishlists/{}", id)).await
    }

    /// Delete a wishlist. `DELETE /wishlists/{id}`
    ///
    /// The service answers with an empty body, and deletes are idempotent:
    /// an unknown id still succeeds.
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.delete_empty(&format!("wishlists/{}", id)).await
    }

    /// Search wishlists. `GET /wishlists?name=&email=`
    ///
    /// Blank filters are omitted from the query string entirely; response
    /// order is preserved.
    pub async fn search(&self, query: &WishlistQuery) -> ClientResult<Vec<Wishlist>> {
        self.get_query("wishlists", query).await
    }

    /// Count wishlists for one customer. `GET /wishlists?customer_email=`
    ///
    /// Reports the length of the returned list without inspecting the
    /// records themselves, so foreign record shapes still count.
    pub async fn count_by_customer(&self, query: &CustomerCountQuery) -> ClientResult<usize> {
        let records: Vec<serde_json::Value> = self.get_query("wishlists", query).await?;
        Ok(records.len())
    }

    /// Add an item to a wishlist. `POST /wishlists/{id}/items`
    pub async fn add_item(&self, wishlist_id: &str, payload: &ItemCreate) -> ClientResult<Item> {
        self.post(&format!("wishlists/{}/items", wishlist_id), payload)
            .await
    }
}
