//! bookstack: a book catalog service with fuzzy search
//!
//! The interesting part lives in [`search`]: a two-stage match-and-rank
//! pipeline (cheap subsequence admission, then alignment scoring) tolerant
//! of typos, partial words and out-of-order fragments. Everything else is
//! plumbing: an in-memory [`store`], an axum [`api`] layer, and the shared
//! [`error`] taxonomy.

pub mod api;
pub mod cli;
pub mod error;
pub mod models;
pub mod search;
pub mod store;
