//! Book records and API request/response types
//!
//! All types derive `Serialize`/`Deserialize` for JSON marshalling via Axum,
//! plus `JsonSchema` so the `/api-docs` endpoint can publish their schemas.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A catalog record. The `id` is opaque and assigned by the store; the
/// search pipeline never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,
}

/// Client-supplied book payload; the store assigns the id on insert.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,
}

/// The text fields the search pipeline is allowed to match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Author,
    Genre,
}

impl SearchField {
    /// All searchable fields, in scoring order.
    pub const ALL: [SearchField; 3] = [SearchField::Title, SearchField::Author, SearchField::Genre];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Genre => "genre",
        }
    }
}

impl Book {
    /// Text of one searchable field. Fields are plain strings on this record;
    /// an empty string stands in for an absent value and never matches.
    pub fn field_text(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.title,
            SearchField::Author => &self.author,
            SearchField::Genre => &self.genre,
        }
    }

    /// Build a full record from a client payload and a store-assigned id.
    pub fn from_new(id: String, new: NewBook) -> Self {
        Self {
            id,
            title: new.title,
            author: new.author,
            genre: new.genre,
            published_year: new.published_year,
        }
    }
}

/// Body of `POST /books`: either a single book or a bulk array.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum BookPayload {
    Many(Vec<NewBook>),
    One(NewBook),
}

/// Query parameters for `GET /books`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

/// Query parameters for `GET /books/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Response body of `GET /books/search`.
#[derive(Debug, Serialize, JsonSchema)]
pub struct SearchResponse {
    pub results: Vec<Book>,
    pub total: usize,
}

/// Response body for inserts: the created record(s) plus a message.
#[derive(Debug, Serialize, JsonSchema)]
pub struct InsertResponse {
    pub message: String,
    pub data: Vec<Book>,
}

/// Simple `{"message": ...}` response body.
#[derive(Debug, Serialize, JsonSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        Book {
            id: "b1".to_string(),
            title: "The Hobbit".to_string(),
            author: "J.R.R. Tolkien".to_string(),
            genre: "Fantasy".to_string(),
            published_year: Some(1937),
        }
    }

    #[test]
    fn test_field_text() {
        let book = sample();
        assert_eq!(book.field_text(SearchField::Title), "The Hobbit");
        assert_eq!(book.field_text(SearchField::Author), "J.R.R. Tolkien");
        assert_eq!(book.field_text(SearchField::Genre), "Fantasy");
    }

    #[test]
    fn test_search_field_names() {
        assert_eq!(SearchField::Title.as_str(), "title");
        assert_eq!(SearchField::Author.as_str(), "author");
        assert_eq!(SearchField::Genre.as_str(), "genre");
    }

    #[test]
    fn test_payload_untagged_single() {
        let payload: BookPayload = serde_json::from_value(serde_json::json!({
            "title": "Dune", "author": "Frank Herbert", "genre": "Sci-Fi"
        }))
        .unwrap();
        assert!(matches!(payload, BookPayload::One(_)));
    }

    #[test]
    fn test_payload_untagged_array() {
        let payload: BookPayload = serde_json::from_value(serde_json::json!([
            { "title": "Dune", "author": "Frank Herbert", "genre": "Sci-Fi" }
        ]))
        .unwrap();
        match payload {
            BookPayload::Many(books) => assert_eq!(books.len(), 1),
            BookPayload::One(_) => panic!("array body should deserialize as Many"),
        }
    }

    #[test]
    fn test_published_year_optional() {
        let new: NewBook = serde_json::from_value(serde_json::json!({
            "title": "Dune", "author": "Frank Herbert", "genre": "Sci-Fi"
        }))
        .unwrap();
        assert!(new.published_year.is_none());

        let book = Book::from_new("id1".to_string(), new);
        let json = serde_json::to_value(&book).unwrap();
        assert!(json.get("published_year").is_none());
    }
}
