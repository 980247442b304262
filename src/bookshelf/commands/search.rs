use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::BookStore;

/// Case-insensitive substring search over title and author.
///
/// Case folding is ASCII only, so "É" and "é" are different letters here.
pub fn run<S: BookStore>(store: &S, keyword: &str) -> Result<CmdResult> {
    if keyword.is_empty() {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::warning("Empty keyword. Aborting search.")));
    }

    let books = store.load_books()?;
    if books.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No books to search.")));
    }

    let needle = keyword.to_ascii_lowercase();
    let matches: Vec<Book> = books
        .into_iter()
        .filter(|book| matches_keyword(book, &needle))
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No matches found for \"{}\".",
            keyword
        )));
    }
    Ok(result.with_listed_books(matches))
}

fn matches_keyword(book: &Book, needle: &str) -> bool {
    book.title.to_ascii_lowercase().contains(needle)
        || book.author.to_ascii_lowercase().contains(needle)
}
