//! Candidate Filter
//!
//! Cheap admission test run before scoring: a record survives when at least
//! one searchable field contains every character of the query, in order,
//! with anything in between. The test is expressed as a case-insensitive
//! regex built from the query with `.*` between each (escaped) character,
//! the same shape of pattern the original catalog service sent to its
//! database as a prefilter.

use super::SearchError;
use crate::models::{Book, SearchField};
use regex::Regex;
use tracing::debug;

/// Build the subsequence admission pattern for a query.
///
/// Every query character goes through `regex::escape`, so characters with
/// pattern meaning (`.`, `*`, `(` ...) are matched literally.
pub fn subsequence_pattern(query: &str) -> Result<Regex, SearchError> {
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    let mut pattern = String::with_capacity(query.len() * 4 + 4);
    pattern.push_str("(?i)");
    let mut first = true;
    for ch in query.chars() {
        if !first {
            pattern.push_str(".*");
        }
        pattern.push_str(&regex::escape(ch.encode_utf8(&mut [0u8; 4])));
        first = false;
    }

    Ok(Regex::new(&pattern)?)
}

/// Reduce a record set to the candidates worth scoring.
///
/// Returns `SearchError::NoMatch` when nothing survives, so the caller can
/// distinguish "no matches" from an empty-but-valid result and from a
/// pattern failure. This stage does not score or order anything.
pub fn filter_candidates(
    query: &str,
    fields: &[SearchField],
    records: Vec<Book>,
) -> Result<Vec<Book>, SearchError> {
    let pattern = subsequence_pattern(query)?;

    let total = records.len();
    let candidates: Vec<Book> = records
        .into_iter()
        .filter(|book| fields.iter().any(|&f| pattern.is_match(book.field_text(f))))
        .collect();

    debug!(
        "candidate filter admitted {} of {} records for query '{}'",
        candidates.len(),
        total,
        query
    );

    if candidates.is_empty() {
        return Err(SearchError::NoMatch);
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, title: &str, author: &str, genre: &str) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            published_year: None,
        }
    }

    #[test]
    fn test_subsequence_admission() {
        let shelf = vec![
            book("1", "The Hobbit", "J.R.R. Tolkien", "Fantasy"),
            book("2", "Dune", "Frank Herbert", "Science Fiction"),
        ];

        let admitted = filter_candidates("tlkn", &SearchField::ALL, shelf).unwrap();
        assert_eq!(admitted.len(), 1);
        assert_eq!(admitted[0].id, "1");
    }

    #[test]
    fn test_case_insensitive() {
        let shelf = vec![book("1", "DUNE", "Frank Herbert", "Sci-Fi")];
        let admitted = filter_candidates("dune", &SearchField::ALL, shelf).unwrap();
        assert_eq!(admitted.len(), 1);
    }

    #[test]
    fn test_not_a_subsequence_is_excluded() {
        let shelf = vec![book("1", "The Hobbit", "J.R.R. Tolkien", "Fantasy")];
        let result = filter_candidates("xyz", &SearchField::ALL, shelf);
        assert!(matches!(result, Err(SearchError::NoMatch)));
    }

    #[test]
    fn test_out_of_order_is_excluded() {
        // All characters present but in the wrong order.
        let shelf = vec![book("1", "acb", "", "")];
        let result = filter_candidates("abc", &SearchField::ALL, shelf);
        assert!(matches!(result, Err(SearchError::NoMatch)));
    }

    #[test]
    fn test_any_field_admits() {
        let shelf = vec![book("1", "Dune", "Frank Herbert", "Science Fiction")];
        let admitted = filter_candidates("herb", &SearchField::ALL, shelf).unwrap();
        assert_eq!(admitted.len(), 1);
    }

    #[test]
    fn test_restricted_field_list() {
        let shelf = vec![book("1", "Dune", "Frank Herbert", "Science Fiction")];
        let result = filter_candidates("herb", &[SearchField::Title], shelf);
        assert!(matches!(result, Err(SearchError::NoMatch)));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let shelf = vec![
            book("1", "C++ Primer", "Stanley Lippman", "Programming"),
            book("2", "Clean Code", "Robert Martin", "Programming"),
        ];

        // '+' and '.' must not be interpreted by the pattern engine.
        let admitted = filter_candidates("c++", &SearchField::ALL, shelf).unwrap();
        assert_eq!(admitted.len(), 1);
        assert_eq!(admitted[0].id, "1");

        let shelf = vec![book("1", "The Hobbit", "J.R.R. Tolkien", "Fantasy")];
        let admitted = filter_candidates("j.r.r", &SearchField::ALL, shelf).unwrap();
        assert_eq!(admitted.len(), 1);
    }

    #[test]
    fn test_empty_field_never_matches() {
        let shelf = vec![book("1", "", "", "")];
        let result = filter_candidates("a", &SearchField::ALL, shelf);
        assert!(matches!(result, Err(SearchError::NoMatch)));
    }

    #[test]
    fn test_empty_query_fails_explicitly() {
        let shelf = vec![book("1", "The Hobbit", "J.R.R. Tolkien", "Fantasy")];
        let result = filter_candidates("", &SearchField::ALL, shelf);
        assert!(matches!(result, Err(SearchError::EmptyQuery)));
    }
}
