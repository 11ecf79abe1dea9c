//! In-process mock of the wishlist service.
//!
//! Shaped like the real axum handlers it stands in for: delete answers 204
//! even for unknown ids, lookups fail with a `{message}` body, and the list
//! endpoint filters by `name`, then `email`, then `customer_email`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, RawQuery, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use shared::{ErrorResponse, Item, ItemCreate, Wishlist, WishlistCreate, WishlistUpdate};
use wishlist_client::{ClientConfig, HttpClient};

/// Shared store behind the mock handlers
#[derive(Clone, Default)]
pub struct MockService {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    records: Vec<Wishlist>,
    next_item_id: i64,
    items: Vec<Item>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes of the wishlist resource
    pub fn router(&self) -> Router {
        Router::new()
            .route("/wishlists", get(list).post(create))
            .route(
                "/wishlists/{id}",
                get(get_by_id).put(update).delete(remove),
            )
            .route("/wishlists/{id}/items", post(add_item))
            .with_state(self.clone())
    }

    /// Number of records currently stored
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().records.len()
    }
}

fn not_found(id: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(format!(
            "Wishlist with id '{}' was not found.",
            id
        ))),
    )
}

async fn create(
    State(state): State<MockService>,
    Json(payload): Json<WishlistCreate>,
) -> (StatusCode, Json<Wishlist>) {
    let mut inner = state.inner.lock().unwrap();
    inner.next_id += 1;
    let record = Wishlist {
        id: inner.next_id,
        name: payload.name,
        email: payload.email,
        shared_with1: None,
        shared_with2: None,
        shared_with3: None,
    };
    inner.records.push(record.clone());
    (StatusCode::CREATED, Json(record))
}

async fn get_by_id(
    State(state): State<MockService>,
    Path(id): Path<String>,
) -> Result<Json<Wishlist>, (StatusCode, Json<ErrorResponse>)> {
    let inner = state.inner.lock().unwrap();
    inner
        .records
        .iter()
        .find(|w| w.id.to_string() == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(&id))
}

async fn update(
    State(state): State<MockService>,
    Path(id): Path<String>,
    Json(payload): Json<WishlistUpdate>,
) -> Result<Json<Wishlist>, (StatusCode, Json<ErrorResponse>)> {
    let mut inner = state.inner.lock().unwrap();
    match inner.records.iter_mut().find(|w| w.id.to_string() == id) {
        Some(record) => {
            record.name = payload.name;
            record.email = payload.email;
            Ok(Json(record.clone()))
        }
        None => Err(not_found(&id)),
    }
}

async fn remove(State(state): State<MockService>, Path(id): Path<String>) -> StatusCode {
    let mut inner = state.inner.lock().unwrap();
    inner.records.retain(|w| w.id.to_string() != id);
    StatusCode::NO_CONTENT
}

async fn list(
    State(state): State<MockService>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Wishlist>> {
    let inner = state.inner.lock().unwrap();
    let records = if let Some(name) = params.get("name") {
        inner.records.iter().filter(|w| &w.name == name).cloned().collect()
    } else if let Some(email) = params.get("email") {
        inner.records.iter().filter(|w| &w.email == email).cloned().collect()
    } else if let Some(email) = params.get("customer_email") {
        inner.records.iter().filter(|w| &w.email == email).cloned().collect()
    } else {
        inner.records.clone()
    };
    Json(records)
}

async fn add_item(
    State(state): State<MockService>,
    Path(id): Path<String>,
    Json(payload): Json<ItemCreate>,
) -> Result<(StatusCode, Json<Item>), (StatusCode, Json<ErrorResponse>)> {
    let mut inner = state.inner.lock().unwrap();
    let wishlist_id = match inner.records.iter().find(|w| w.id.to_string() == id) {
        Some(w) => w.id,
        None => return Err(not_found(&id)),
    };

    inner.next_item_id += 1;
    let item = Item {
        id: inner.next_item_id,
        wishlist_id,
        name: payload.name,
        sku: payload.sku,
        description: payload.description,
        quantity: payload.quantity,
    };
    inner.items.push(item.clone());
    Ok((StatusCode::CREATED, Json(item)))
}

/// Record of the raw query strings a router has seen
#[derive(Clone, Default)]
pub struct QueryLog(Arc<Mutex<Vec<Option<String>>>>);

impl QueryLog {
    pub fn last(&self) -> Option<Option<String>> {
        self.0.lock().unwrap().last().cloned()
    }
}

/// Router that records each list query string and answers with no rows
pub fn recording_router(log: QueryLog) -> Router {
    async fn record(State(log): State<QueryLog>, RawQuery(query): RawQuery) -> Json<Vec<Wishlist>> {
        log.0.lock().unwrap().push(query);
        Json(Vec::new())
    }

    Router::new()
        .route("/wishlists", get(record))
        .with_state(log)
}

/// Router where every wishlist operation fails
pub fn broken_router() -> Router {
    Router::new()
        .route(
            "/wishlists",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("search index offline")),
                )
            })
            .post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "backend exploded") }),
        )
        .route(
            "/wishlists/{id}",
            delete(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("database is on fire")),
                )
            })
            .put(|| async { StatusCode::INTERNAL_SERVER_ERROR })
            .get(|| async { Json("not a record") }),
        )
}

/// Serve a router on an ephemeral port and return its base URL
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Client pointed at a base URL, with a short test timeout
pub fn client(base_url: &str) -> HttpClient {
    ClientConfig::new(base_url).with_timeout(5).build_http_client()
}
