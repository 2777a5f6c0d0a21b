//! In-process catalog backend for round-trip tests.
//!
//! Serves the product collection at the root path and keeps records in
//! memory, assigning sequential string ids.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Store {
    next_id: u64,
    products: BTreeMap<u64, Map<String, Value>>,
}

type SharedStore = Arc<Mutex<Store>>;

/// Running fake backend.
pub struct FakeCatalog {
    base_url: String,
}

impl FakeCatalog {
    /// Binds an ephemeral port and starts serving.
    pub async fn start() -> Self {
        let store = SharedStore::default();
        let router = Router::new()
            .route("/", get(list_products).post(create_product))
            .route(
                "/:id",
                get(get_product).put(update_product).delete(delete_product),
            )
            .with_state(store);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake catalog");
        let addr = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Fake catalog stopped");
        });

        Self {
            base_url: format!("http://{}", addr),
        }
    }

    /// Returns the collection root URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"message": "Product not found"})),
    )
}

fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

fn is_valid(body: &Map<String, Value>) -> bool {
    let has_name = body
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.trim().is_empty());
    let has_price = body.get("price").is_some_and(Value::is_number);
    has_name && has_price
}

async fn list_products(State(store): State<SharedStore>) -> Json<Value> {
    let store = store.lock().unwrap();
    Json(Value::Array(
        store.products.values().cloned().map(Value::Object).collect(),
    ))
}

async fn create_product(
    State(store): State<SharedStore>,
    Json(mut body): Json<Map<String, Value>>,
) -> (StatusCode, Json<Value>) {
    if !is_valid(&body) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "name and price are required"})),
        );
    }

    let mut store = store.lock().unwrap();
    store.next_id += 1;
    let id = store.next_id;
    body.insert("id".to_string(), Value::String(id.to_string()));
    store.products.insert(id, body.clone());

    (StatusCode::CREATED, Json(Value::Object(body)))
}

async fn get_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    let store = store.lock().unwrap();
    match parse_id(&id).and_then(|id| store.products.get(&id)) {
        Some(product) => (StatusCode::OK, Json(Value::Object(product.clone()))),
        None => not_found(),
    }
}

async fn update_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    Json(mut body): Json<Map<String, Value>>,
) -> (StatusCode, Json<Value>) {
    if !is_valid(&body) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "name and price are required"})),
        );
    }

    let mut store = store.lock().unwrap();
    let Some(key) = parse_id(&id).filter(|key| store.products.contains_key(key)) else {
        return not_found();
    };

    body.insert("id".to_string(), Value::String(key.to_string()));
    store.products.insert(key, body.clone());
    (StatusCode::OK, Json(Value::Object(body)))
}

async fn delete_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    let mut store = store.lock().unwrap();
    match parse_id(&id).and_then(|id| store.products.remove(&id)) {
        Some(_) => (StatusCode::OK, Json(json!({"deleted": true, "id": id}))),
        None => not_found(),
    }
}
