use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &S) -> Result<CmdResult> {
    let books = store.load_books()?;
    let mut result = CmdResult::default();
    if books.is_empty() {
        result.add_message(CmdMessage::info("No books found."));
    }
    Ok(result.with_listed_books(books))
}
