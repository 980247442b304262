//! Book records and their line format.
//!
//! A record occupies one line of the backing file:
//!
//! ```text
//! id|title|author|isbn|available
//! ```
//!
//! `available` is written as `0` or `1`. There is no escaping, so a field that
//! contains [`DELIMITER`] cannot be read back intact. Input paths reject such
//! values through [`validate_field`]; lines already on disk are parsed
//! best-effort by [`Book::parse_line`].

use crate::error::{CatalogError, Result};

pub type BookId = i64;

pub const DELIMITER: char = '|';

pub const TITLE_MAX: usize = 99;
pub const AUTHOR_MAX: usize = 99;
pub const ISBN_MAX: usize = 29;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available: bool,
}

impl Book {
    pub fn new(id: BookId, fields: NewBook) -> Self {
        Self {
            id,
            title: fields.title,
            author: fields.author,
            isbn: fields.isbn,
            available: fields.available,
        }
    }

    pub fn status(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Borrowed"
        }
    }

    /// Parse one line of the backing file.
    ///
    /// Never fails: numeric fields that do not parse become 0, missing fields
    /// are empty, extra fields are ignored and text is clipped to its limit.
    pub fn parse_line(line: &str) -> Self {
        let mut fields = line.split(DELIMITER);
        let id = parse_leading_int(fields.next().unwrap_or_default());
        let title = truncate_chars(fields.next().unwrap_or_default(), TITLE_MAX);
        let author = truncate_chars(fields.next().unwrap_or_default(), AUTHOR_MAX);
        let isbn = truncate_chars(fields.next().unwrap_or_default(), ISBN_MAX);
        let available = parse_leading_int(fields.next().unwrap_or_default()) != 0;

        Self {
            id,
            title,
            author,
            isbn,
            available,
        }
    }

    /// Serialize to a single line, without the trailing newline.
    pub fn to_line(&self) -> String {
        format!(
            "{id}{d}{title}{d}{author}{d}{isbn}{d}{flag}",
            id = self.id,
            title = self.title,
            author = self.author,
            isbn = self.isbn,
            flag = u8::from(self.available),
            d = DELIMITER,
        )
    }
}

/// Operator-supplied fields for a new record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available: bool,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        available: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            available,
        }
    }

    /// Reject unstorable values and clip the rest to the field limits.
    pub fn normalized(self) -> Result<Self> {
        Ok(Self {
            title: validate_field("title", &self.title, TITLE_MAX)?,
            author: validate_field("author", &self.author, AUTHOR_MAX)?,
            isbn: validate_field("ISBN", &self.isbn, ISBN_MAX)?,
            available: self.available,
        })
    }
}

/// Check that `value` survives a write/read cycle and clip it to `max` chars.
pub fn validate_field(field: &'static str, value: &str, max: usize) -> Result<String> {
    if value.contains(DELIMITER) {
        return Err(CatalogError::InvalidField {
            field,
            reason: format!("the '{}' character is not allowed", DELIMITER),
        });
    }
    if value.contains(['\n', '\r']) {
        return Err(CatalogError::InvalidField {
            field,
            reason: "line breaks are not allowed".to_string(),
        });
    }
    Ok(truncate_chars(value, max))
}

/// Lenient integer parse: optional leading whitespace and sign, then digits.
/// Anything unparseable is 0 and overflow saturates.
pub fn parse_leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }

    if negative {
        -value
    } else {
        value
    }
}

/// Like [`parse_leading_int`] but `None` when there are no digits at all.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let unsigned = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
    if unsigned.starts_with(|c: char| c.is_ascii_digit()) {
        Some(parse_leading_int(trimmed))
    } else {
        None
    }
}

pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gatsby() -> Book {
        Book::new(
            1,
            NewBook::new("The Great Gatsby", "F. Scott Fitzgerald", "978-0743273565", true),
        )
    }

    #[test]
    fn serializes_as_pipe_delimited_line() {
        assert_eq!(
            gatsby().to_line(),
            "1|The Great Gatsby|F. Scott Fitzgerald|978-0743273565|1"
        );
    }

    #[test]
    fn parses_well_formed_line() {
        let book = Book::parse_line("1|The Great Gatsby|F. Scott Fitzgerald|978-0743273565|1");
        assert_eq!(book, gatsby());
    }

    #[test]
    fn borrowed_flag_roundtrips() {
        let mut book = gatsby();
        book.available = false;
        assert_eq!(Book::parse_line(&book.to_line()), book);
        assert_eq!(book.status(), "Borrowed");
    }

    #[test]
    fn empty_fields_keep_their_position() {
        let book = Book::parse_line("4||Anonymous||0");
        assert_eq!(book.id, 4);
        assert_eq!(book.title, "");
        assert_eq!(book.author, "Anonymous");
        assert_eq!(book.isbn, "");
        assert!(!book.available);
    }

    #[test]
    fn non_numeric_fields_coerce_to_zero() {
        let book = Book::parse_line("abc|Title|Author|123|yes");
        assert_eq!(book.id, 0);
        assert!(!book.available);
    }

    #[test]
    fn short_line_fills_defaults() {
        let book = Book::parse_line("7|Only Title");
        assert_eq!(book.id, 7);
        assert_eq!(book.title, "Only Title");
        assert_eq!(book.author, "");
        assert!(!book.available);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let book = Book::parse_line("2|T|A|I|1|surplus|more");
        assert_eq!(book.isbn, "I");
        assert!(book.available);
    }

    #[test]
    fn long_fields_are_clipped_on_parse() {
        let title = "t".repeat(150);
        let isbn = "9".repeat(40);
        let book = Book::parse_line(&format!("1|{}|a|{}|1", title, isbn));
        assert_eq!(book.title.chars().count(), TITLE_MAX);
        assert_eq!(book.isbn.chars().count(), ISBN_MAX);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn leading_int_parse_is_lenient() {
        assert_eq!(parse_leading_int("42"), 42);
        assert_eq!(parse_leading_int("  -7xyz"), -7);
        assert_eq!(parse_leading_int("+3"), 3);
        assert_eq!(parse_leading_int("x1"), 0);
        assert_eq!(parse_leading_int(""), 0);
        assert_eq!(parse_leading_int("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn int_prefix_requires_a_digit() {
        assert_eq!(parse_int_prefix(" 12 apples"), Some(12));
        assert_eq!(parse_int_prefix("-1"), Some(-1));
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
    }

    #[test]
    fn rejects_delimiter_in_field() {
        let err = NewBook::new("A|B", "Author", "1", true)
            .normalized()
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidField { field: "title", .. }
        ));
    }

    #[test]
    fn rejects_line_breaks_in_field() {
        let err = validate_field("author", "two\nlines", AUTHOR_MAX).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidField { field: "author", .. }
        ));
    }

    #[test]
    fn normalizing_clips_to_limits() {
        let book = NewBook::new("x".repeat(120), "y", "z".repeat(35), false)
            .normalized()
            .unwrap();
        assert_eq!(book.title.len(), TITLE_MAX);
        assert_eq!(book.isbn.len(), ISBN_MAX);
    }
}
