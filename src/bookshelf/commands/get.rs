use crate::commands::CmdResult;
use crate::error::{CatalogError, Result};
use crate::model::{Book, BookId};
use crate::store::BookStore;

/// Fetch the first record with `id`.
pub fn run<S: BookStore>(store: &S, id: BookId) -> Result<CmdResult> {
    let books = store.load_books()?;
    let book = find(&books, id)?.clone();
    Ok(CmdResult::default().with_listed_books(vec![book]))
}

/// Position of the first record with `id`.
pub(crate) fn position(books: &[Book], id: BookId) -> Result<usize> {
    books
        .iter()
        .position(|b| b.id == id)
        .ok_or(CatalogError::BookNotFound(id))
}

pub(crate) fn find(books: &[Book], id: BookId) -> Result<&Book> {
    position(books, id).map(|idx| &books[idx])
}
