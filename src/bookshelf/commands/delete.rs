use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookId;
use crate::store::BookStore;

use super::get::position;

/// Remove the record with `id` and rewrite the catalog.
///
/// Does not ask for confirmation; the UI fetches the record with
/// [`super::get::run`], confirms with the operator, then calls this.
pub fn run<S: BookStore>(store: &mut S, id: BookId) -> Result<CmdResult> {
    let mut books = store.load_books()?;
    let idx = position(&books, id)?;
    let removed = books.remove(idx);
    store.save_books(&books)?;
    tracing::info!(id, title = %removed.title, "book deleted");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Book with ID {} deleted.", id)))
        .with_affected_books(vec![removed]))
}
