//! Error types and handling for the bookstack service

use crate::search::SearchError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use std::fmt;

/// Application error types. Each variant maps to a stable error code and an
/// HTTP status:
/// - `InvalidInput` → 400
/// - `NotFound` → 404
/// - `NoMatch` → 404 (search-specific: valid query, zero candidates)
/// - `TooLarge` → 413
/// - `Internal` → 500
#[derive(Debug, Serialize)]
pub enum AppError {
    InvalidInput(String),
    NotFound(String),
    NoMatch(String),
    TooLarge(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::NoMatch(msg) => write!(f, "No match: {}", msg),
            AppError::TooLarge(msg) => write!(f, "Request too large: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Stable machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::NotFound(_) => "not_found",
            AppError::NoMatch(_) => "no_match",
            AppError::TooLarge(_) => "too_large",
            AppError::Internal(_) => "internal_error",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::NoMatch(_) => StatusCode::NOT_FOUND,
            AppError::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string(),
            "code": self.error_code(),
        }));
        (self.status(), body).into_response()
    }
}

/// Search outcomes surface through the same taxonomy: `NoMatch` stays a
/// distinct not-an-error outcome, everything else is internal.
impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::EmptyQuery => AppError::InvalidInput(err.to_string()),
            SearchError::NoMatch => AppError::NoMatch("No matching books found".to_string()),
            SearchError::Pattern(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Validate a raw search query before the pipeline runs.
pub fn validate_query(query: &str) -> Result<(), AppError> {
    if query.is_empty() {
        return Err(AppError::InvalidInput("Query cannot be empty".to_string()));
    }

    if query.len() > 500 {
        return Err(AppError::InvalidInput(
            "Query too long, maximum 500 characters".to_string(),
        ));
    }

    Ok(())
}

/// Normalize text using Unicode NFKC and trim surrounding whitespace.
pub fn normalize_text(text: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    text.nfkc().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_query_empty() {
        assert!(validate_query("").is_err());
        assert!(validate_query("tolkien").is_ok());
    }

    #[test]
    fn test_validate_query_too_long() {
        let long = "q".repeat(501);
        assert!(validate_query(&long).is_err());
        let max = "q".repeat(500);
        assert!(validate_query(&max).is_ok());
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  dune  "), "dune");
        // NFKC folds the fullwidth form to ASCII.
        assert_eq!(normalize_text("Ｄune"), "Dune");
    }

    #[test]
    fn test_no_match_maps_to_distinct_code() {
        let err: AppError = SearchError::NoMatch.into();
        assert_eq!(err.error_code(), "no_match");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_empty_query_maps_to_invalid_input() {
        let err: AppError = SearchError::EmptyQuery.into();
        assert_eq!(err.error_code(), "invalid_input");
    }
}
