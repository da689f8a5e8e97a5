//! HTTP layer: router, handlers and request logging
//!
//! Maps store and search outcomes onto the JSON API. The search handler is
//! the only caller of the fuzzy pipeline: validate → normalize → fetch the
//! record snapshot → filter → rank.

use crate::error::{normalize_text, validate_query, AppError};
use crate::models::{
    Book, BookPayload, InsertResponse, ListParams, MessageResponse, NewBook, SearchField,
    SearchParams, SearchResponse,
};
use crate::search::{run_search, SearchOptions};
use crate::store::{BookStore, DEFAULT_PAGE_LIMIT};
use axum::extract::{Path, Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use schemars::schema_for;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Shared application state passed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<BookStore>,
    pub search_options: SearchOptions,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(BookStore::new()),
            search_options: SearchOptions::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the service router with request logging attached.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/books", get(list_books).post(create_books))
        .route("/books/search", get(search_books))
        .route(
            "/books/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
        .route("/api-docs", get(api_docs))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

/// Per-request logging middleware: method, path, status, latency.
async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    info!(
        "{} {} -> {} ({} ms)",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );
    response
}

/// `GET /`
async fn root() -> &'static str {
    "bookstack: book catalog API"
}

/// `POST /books`: single object or bulk array body.
async fn create_books(
    State(state): State<AppState>,
    Json(payload): Json<BookPayload>,
) -> Result<(StatusCode, Json<InsertResponse>), AppError> {
    let (message, data) = match payload {
        BookPayload::One(new) => {
            let book = state.store.insert(new).await;
            ("Book added successfully", vec![book])
        }
        BookPayload::Many(batch) => {
            let books = state.store.insert_many(batch).await?;
            ("Books added successfully", books)
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(InsertResponse {
            message: message.to_string(),
            data,
        }),
    ))
}

/// `GET /books?page=&limit=`
async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Book>> {
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
    Json(state.store.find(page, limit).await)
}

/// `GET /books/search?q=`
///
/// 400 for a missing/empty query, 404 with a distinct body when the filter
/// admits zero candidates, 500 only for unexpected pipeline failures.
async fn search_books(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let q = params
        .q
        .ok_or_else(|| AppError::InvalidInput("Query param \"q\" is required".to_string()))?;
    validate_query(&q)?;

    let query = normalize_text(&q);
    if query.is_empty() {
        return Err(AppError::InvalidInput(
            "Query is empty after normalization".to_string(),
        ));
    }

    let records = state.store.find_all().await;
    let ranked = run_search(&query, &SearchField::ALL, records, &state.search_options)?;

    Ok(Json(SearchResponse {
        results: ranked.results,
        total: ranked.total_matches,
    }))
}

/// `GET /books/:id`
async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, AppError> {
    Ok(Json(state.store.find_by_id(&id).await?))
}

/// `PUT /books/:id`
async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(new): Json<NewBook>,
) -> Result<Json<Book>, AppError> {
    Ok(Json(state.store.update_by_id(&id, new).await?))
}

/// `DELETE /books/:id`
async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.store.delete_by_id(&id).await?;
    Ok(Json(MessageResponse {
        message: "Deleted".to_string(),
    }))
}

/// `GET /api-docs`: machine-readable schemas for the API models.
async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "bookstack",
        "version": env!("CARGO_PKG_VERSION"),
        "paths": {
            "/books": ["GET", "POST"],
            "/books/search": ["GET"],
            "/books/{id}": ["GET", "PUT", "DELETE"],
        },
        "schemas": {
            "Book": schema_for!(Book),
            "NewBook": schema_for!(NewBook),
            "SearchResponse": schema_for!(SearchResponse),
        },
    }))
}
