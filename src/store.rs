//! In-memory book store
//!
//! The record store collaborator of the search pipeline: plain CRUD over an
//! insertion-ordered vector behind an async RwLock. Insertion order matters
//! downstream: the ranking stage's tie-break is the order records come out
//! of here.

use crate::error::AppError;
use crate::models::{Book, NewBook};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// Upper bound on one bulk insert request.
pub const MAX_BULK_INSERT: usize = 20;

/// Default page size for listings.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

#[derive(Debug, Default)]
pub struct BookStore {
    books: RwLock<Vec<Book>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single book, assigning a fresh id.
    pub async fn insert(&self, new: NewBook) -> Book {
        let book = Book::from_new(Uuid::new_v4().to_string(), new);
        let mut books = self.books.write().await;
        books.push(book.clone());
        info!("inserted book {} ('{}')", book.id, book.title);
        book
    }

    /// Insert a batch of books. Empty batches are invalid and batches over
    /// [`MAX_BULK_INSERT`] are rejected outright, nothing is applied.
    pub async fn insert_many(&self, batch: Vec<NewBook>) -> Result<Vec<Book>, AppError> {
        if batch.is_empty() {
            return Err(AppError::InvalidInput("Empty array not allowed".to_string()));
        }
        if batch.len() > MAX_BULK_INSERT {
            return Err(AppError::TooLarge(format!(
                "Max {} books allowed in one bulk request",
                MAX_BULK_INSERT
            )));
        }

        let inserted: Vec<Book> = batch
            .into_iter()
            .map(|new| Book::from_new(Uuid::new_v4().to_string(), new))
            .collect();

        let mut books = self.books.write().await;
        books.extend(inserted.iter().cloned());
        info!("bulk inserted {} books", inserted.len());
        Ok(inserted)
    }

    /// Page through the catalog. Pages are 1-based; a page past the end is
    /// an empty list, not an error. Page and limit come straight from query
    /// params, so the skip arithmetic saturates instead of overflowing.
    pub async fn find(&self, page: usize, limit: usize) -> Vec<Book> {
        let skip = page.saturating_sub(1).saturating_mul(limit);
        let books = self.books.read().await;
        books.iter().skip(skip).take(limit).cloned().collect()
    }

    /// Snapshot of every record, in insertion order.
    pub async fn find_all(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Book, AppError> {
        let books = self.books.read().await;
        books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("No book with id {}", id)))
    }

    /// Replace a book's fields in place, keeping its id and position.
    pub async fn update_by_id(&self, id: &str, new: NewBook) -> Result<Book, AppError> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("No book with id {}", id)))?;

        *book = Book::from_new(id.to_string(), new);
        debug!("updated book {}", id);
        Ok(book.clone())
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        let mut books = self.books.write().await;
        let before = books.len();
        books.retain(|b| b.id != id);
        if books.len() == before {
            return Err(AppError::NotFound(format!("No book with id {}", id)));
        }
        debug!("deleted book {}", id);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}
