use crate::commands::{BookUpdate, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookId;
use crate::store::BookStore;

use super::get::position;

/// Apply `update` to the record with `id` and rewrite the catalog.
///
/// An unknown ID fails before anything is written. An empty update still
/// rewrites the file, matching what the operator sees when every field
/// prompt is declined.
pub fn run<S: BookStore>(store: &mut S, id: BookId, update: BookUpdate) -> Result<CmdResult> {
    let update = update.normalized()?;

    let mut books = store.load_books()?;
    let idx = position(&books, id)?;
    update.apply_to(&mut books[idx]);
    store.save_books(&books)?;
    tracing::info!(id, "book updated");

    let updated = books.swap_remove(idx);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Book with ID {} updated.", id)))
        .with_affected_books(vec![updated]))
}
