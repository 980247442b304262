//! # Command Layer
//!
//! One module per catalog operation. Each `run` takes a [`BookStore`], does
//! the whole load / mutate / write cycle and returns a [`CmdResult`].
//!
//! Commands never prompt. Operations that need the operator's input halfway
//! through (update shows the current values, delete asks for confirmation)
//! are split: the UI first calls [`get::run`] to fetch the record, talks to
//! the operator, then calls the mutating command.
//!
//! [`BookStore`]: crate::store::BookStore

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::model::{validate_field, Book, AUTHOR_MAX, ISBN_MAX, TITLE_MAX};

pub mod add;
pub mod config;
pub mod delete;
pub mod get;
pub mod list;
pub mod search;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<Book>,
    pub config: Option<CatalogConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Field changes for an existing record. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub available: Option<bool>,
}

impl BookUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    pub(crate) fn normalized(self) -> Result<Self> {
        Ok(Self {
            title: self
                .title
                .map(|v| validate_field("title", &v, TITLE_MAX))
                .transpose()?,
            author: self
                .author
                .map(|v| validate_field("author", &v, AUTHOR_MAX))
                .transpose()?,
            isbn: self
                .isbn
                .map(|v| validate_field("ISBN", &v, ISBN_MAX))
                .transpose()?,
            available: self.available,
        })
    }

    pub(crate) fn apply_to(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(isbn) = self.isbn {
            book.isbn = isbn;
        }
        if let Some(available) = self.available {
            book.available = available;
        }
    }
}
