//! # Storage Layer
//!
//! The [`BookStore`] trait is the seam between catalog logic and persistence.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the production store, a single pipe-delimited text file
//! - [`memory::InMemoryStore`]: keeps the serialized lines in memory, for tests
//!
//! ## Access Pattern
//!
//! Every catalog operation loads the whole collection, works on it in memory
//! and, when it mutates, rewrites the whole collection. Adding a record is the
//! one exception: it appends a single line. No locking is performed, so two
//! processes writing the same file will clobber each other.

use crate::error::Result;
use crate::model::{Book, BookId};

pub mod fs;
pub mod memory;

pub trait BookStore {
    /// Load every record in file order. A store that was never written is empty.
    fn load_books(&self) -> Result<Vec<Book>>;

    /// Replace the stored collection with `books`.
    fn save_books(&mut self, books: &[Book]) -> Result<()>;

    /// Add one record after the existing ones without rewriting them.
    fn append_book(&mut self, book: &Book) -> Result<()>;
}

/// One more than the highest ID in `books`, or 1 for an empty collection.
pub fn next_id(books: &[Book]) -> BookId {
    books
        .iter()
        .map(|b| b.id)
        .max()
        .unwrap_or(0)
        .max(0)
        .saturating_add(1)
}

/// Serialize `books` the way they are laid out on disk.
pub fn render_lines(books: &[Book]) -> String {
    let mut out = String::new();
    for book in books {
        out.push_str(&book.to_line());
        out.push('\n');
    }
    out
}

/// Parse file content into records, skipping blank lines.
///
/// If the collection cannot grow, the whole result is discarded rather than
/// returning a silently truncated list.
pub fn parse_lines(content: &str) -> Vec<Book> {
    let mut books = Vec::new();
    for line in content.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        if let Err(e) = books.try_reserve(1) {
            tracing::error!("Memory allocation failed while loading records: {}", e);
            return Vec::new();
        }
        books.push(Book::parse_line(line));
    }
    books
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewBook;

    fn book(id: BookId, title: &str) -> Book {
        Book::new(id, NewBook::new(title, "Author", "isbn", true))
    }

    #[test]
    fn next_id_of_empty_store_is_one() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn next_id_is_max_plus_one() {
        let books = vec![book(3, "a"), book(9, "b"), book(4, "c")];
        assert_eq!(next_id(&books), 10);
    }

    #[test]
    fn next_id_ignores_negative_ids() {
        let books = vec![book(-5, "a")];
        assert_eq!(next_id(&books), 1);
    }

    #[test]
    fn lines_roundtrip_in_order() {
        let books = vec![book(2, "Second"), book(1, "First"), book(7, "")];
        let parsed = parse_lines(&render_lines(&books));
        assert_eq!(parsed, books);
    }

    #[test]
    fn blank_and_crlf_lines_are_handled() {
        let parsed = parse_lines("1|A|B|C|1\r\n\r\n\n2|D|E|F|0\n");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].isbn, "C");
        assert!(parsed[0].available);
        assert_eq!(parsed[1].title, "D");
    }
}
