use super::{parse_lines, render_lines, BookStore};
use crate::error::Result;
use crate::model::Book;

/// In-memory storage for testing.
///
/// Holds the same text the file store would write, so tests can assert on the
/// exact stored bytes.
#[derive(Default)]
pub struct InMemoryStore {
    content: String,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            writes: 0,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of save or append calls that reached the store.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl BookStore for InMemoryStore {
    fn load_books(&self) -> Result<Vec<Book>> {
        Ok(parse_lines(&self.content))
    }

    fn save_books(&mut self, books: &[Book]) -> Result<()> {
        self.content = render_lines(books);
        self.writes += 1;
        Ok(())
    }

    fn append_book(&mut self, book: &Book) -> Result<()> {
        if !self.content.is_empty() && !self.content.ends_with('\n') {
            self.content.push('\n');
        }
        self.content.push_str(&book.to_line());
        self.content.push('\n');
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{BookId, NewBook};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            let start = crate::store::next_id(&self.store.load_books().unwrap());
            for i in 0..count {
                let n = i + 1;
                let book = Book::new(
                    start + i as BookId,
                    NewBook::new(
                        format!("Test Book {}", n),
                        format!("Author {}", n),
                        format!("isbn-{}", n),
                        true,
                    ),
                );
                self.store.append_book(&book).unwrap();
            }
            self
        }

        pub fn with_book(mut self, id: BookId, title: &str, author: &str) -> Self {
            let book = Book::new(id, NewBook::new(title, author, "0000", true));
            self.store.append_book(&book).unwrap();
            self
        }

        pub fn with_borrowed_book(mut self, id: BookId, title: &str, author: &str) -> Self {
            let book = Book::new(id, NewBook::new(title, author, "0000", false));
            self.store.append_book(&book).unwrap();
            self
        }

        /// The fixture's store with its write counter reset.
        pub fn build(self) -> InMemoryStore {
            InMemoryStore::from_content(self.store.content)
        }
    }
}
