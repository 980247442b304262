use bookshelf::api::{CmdMessage, MessageLevel};
use bookshelf::model::Book;
use colored::Colorize;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 5;
const TITLE_WIDTH: usize = 30;
const AUTHOR_WIDTH: usize = 20;
const ISBN_WIDTH: usize = 15;
const STATUS_WIDTH: usize = 10;
const SEPARATOR: &str = " | ";
const TABLE_WIDTH: usize =
    ID_WIDTH + TITLE_WIDTH + AUTHOR_WIDTH + ISBN_WIDTH + STATUS_WIDTH + 4 * SEPARATOR.len();

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content)?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// Header, rule and one fixed-width row per book.
pub(super) fn render_table(books: &[Book]) -> String {
    let mut out = String::new();
    out.push_str(&render_row("ID", "Title", "Author", "ISBN", "Status"));
    out.push_str(&"-".repeat(TABLE_WIDTH));
    out.push('\n');
    for book in books {
        out.push_str(&render_row(
            &book.id.to_string(),
            &book.title,
            &book.author,
            &book.isbn,
            book.status(),
        ));
    }
    out
}

fn render_row(id: &str, title: &str, author: &str, isbn: &str, status: &str) -> String {
    let cells = [
        fit(id, ID_WIDTH),
        fit(title, TITLE_WIDTH),
        fit(author, AUTHOR_WIDTH),
        fit(isbn, ISBN_WIDTH),
        fit(status, STATUS_WIDTH),
    ];
    format!("{}\n", cells.join(SEPARATOR))
}

pub(super) fn render_details(book: &Book) -> String {
    format!(
        "Current details:\nTitle : {}\nAuthor: {}\nISBN  : {}\nStatus: {}\n",
        book.title,
        book.author,
        book.isbn,
        book.status()
    )
}

/// Clip `s` to `width` terminal columns and left-align it in that space.
fn fit(s: &str, width: usize) -> String {
    let mut result = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        result.push(c);
        used += w;
    }
    let padding = width.saturating_sub(result.width());
    result.push_str(&" ".repeat(padding));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf::model::NewBook;

    #[test]
    fn rows_are_fixed_width() {
        let books = vec![
            Book::new(1, NewBook::new("Dune", "Herbert", "111", true)),
            Book::new(
                12,
                NewBook::new("A".repeat(40), "B".repeat(25), "9".repeat(20), false),
            ),
        ];
        let table = render_table(&books);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID    | Title"));
        assert_eq!(
            lines[2],
            "1     | Dune                           | Herbert              | 111             | Available "
        );
        assert!(lines[3].contains(&format!("| {} |", "A".repeat(30))));
        assert!(lines[3].contains(&format!("| {} |", "B".repeat(20))));
        assert!(lines[3].contains(&format!("| {} |", "9".repeat(15))));
        assert!(lines[3].ends_with("Borrowed  "));
        for line in &lines {
            assert_eq!(line.width(), TABLE_WIDTH);
        }
    }

    #[test]
    fn fit_pads_and_clips_by_display_width() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 3), "abc");
        // Wide characters never overflow the column.
        assert_eq!(fit("日本語", 5), "日本 ");
    }

    #[test]
    fn details_show_every_field() {
        let book = Book::new(3, NewBook::new("Emma", "Austen", "222", false));
        let details = render_details(&book);
        assert!(details.contains("Title : Emma"));
        assert!(details.contains("Author: Austen"));
        assert!(details.contains("ISBN  : 222"));
        assert!(details.contains("Status: Borrowed"));
    }

    #[test]
    fn messages_keep_their_text() {
        let mut out = Vec::new();
        print_messages(
            &mut out,
            &[
                CmdMessage::info("No books found."),
                CmdMessage::error("Book with ID 9 not found."),
            ],
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No books found."));
        assert!(text.contains("Book with ID 9 not found."));
    }
}
