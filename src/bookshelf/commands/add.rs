use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, NewBook};
use crate::store::{next_id, BookStore};

pub fn run<S: BookStore>(store: &mut S, fields: NewBook) -> Result<CmdResult> {
    let fields = fields.normalized()?;

    let existing = store.load_books()?;
    let book = Book::new(next_id(&existing), fields);
    store.append_book(&book)?;
    tracing::info!(id = book.id, title = %book.title, "book added");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Book added with ID {}.",
            book.id
        )))
        .with_affected_books(vec![book]))
}
