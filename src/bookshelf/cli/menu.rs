//! The interactive numbered menu.
//!
//! Each handler collects input through a [`Prompter`], calls the API and
//! prints the outcome. A failed operation is reported and the menu is shown
//! again; only a failure to talk to the terminal ends the session.

use super::print::{print_messages, render_details, render_table};
use super::prompt::Prompter;
use bookshelf::api::{BookUpdate, CatalogApi, CmdMessage};
use bookshelf::error::{CatalogError, Result};
use bookshelf::model::{Book, BookId, NewBook};
use bookshelf::store::BookStore;
use std::io::{BufRead, Write};

const MENU: &str = "\n====== Library Book Management System ======\n\
1. Add New Book\n\
2. Search Book (by title/author)\n\
3. Update Book Record (by ID)\n\
4. Delete Book Record (by ID)\n\
5. Display All Books\n\
6. Exit\n\
============================================";

const AVAILABILITY_PROMPT: &str = "Is the book available? (1 = yes, 0 = borrowed): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Search,
    Update,
    Delete,
    Display,
    Exit,
}

impl MenuChoice {
    fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::Search),
            3 => Some(MenuChoice::Update),
            4 => Some(MenuChoice::Delete),
            5 => Some(MenuChoice::Display),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Run the menu until the operator exits or input ends.
pub fn run_menu<S, R, W>(api: &mut CatalogApi<S>, prompt: &mut Prompter<R, W>) -> Result<()>
where
    S: BookStore,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(prompt.out(), "{}", MENU)?;
        let choice = match prompt.int("Enter your choice: ")? {
            Some(n) => MenuChoice::from_number(n),
            None => Some(MenuChoice::Exit),
        };

        let outcome = match choice {
            Some(MenuChoice::Add) => handle_add(api, prompt),
            Some(MenuChoice::Search) => handle_search(api, prompt),
            Some(MenuChoice::Update) => handle_update(api, prompt),
            Some(MenuChoice::Delete) => handle_delete(api, prompt),
            Some(MenuChoice::Display) => handle_display(api, prompt),
            Some(MenuChoice::Exit) => {
                writeln!(prompt.out(), "Exiting. Goodbye!")?;
                return Ok(());
            }
            None => {
                writeln!(prompt.out(), "Invalid choice. Try again.")?;
                continue;
            }
        };

        if let Err(e) = outcome {
            tracing::debug!("operation failed: {:?}", e);
            print_messages(prompt.out(), &[CmdMessage::error(e.to_string())])?;
        }
    }
}

fn handle_add<S, R, W>(api: &mut CatalogApi<S>, prompt: &mut Prompter<R, W>) -> Result<()>
where
    S: BookStore,
    R: BufRead,
    W: Write,
{
    let title = prompt.line("Enter title: ")?.unwrap_or_default();
    let author = prompt.line("Enter author: ")?.unwrap_or_default();
    let isbn = prompt.line("Enter ISBN: ")?.unwrap_or_default();
    let available = prompt.int(AVAILABILITY_PROMPT)?.unwrap_or(0) != 0;

    let result = api.add_book(NewBook::new(title, author, isbn, available))?;
    print_messages(prompt.out(), &result.messages)?;
    Ok(())
}

fn handle_display<S, R, W>(api: &mut CatalogApi<S>, prompt: &mut Prompter<R, W>) -> Result<()>
where
    S: BookStore,
    R: BufRead,
    W: Write,
{
    let result = api.list_books()?;
    if !result.listed_books.is_empty() {
        write!(prompt.out(), "\n{}", render_table(&result.listed_books))?;
    }
    print_messages(prompt.out(), &result.messages)?;
    Ok(())
}

fn handle_search<S, R, W>(api: &mut CatalogApi<S>, prompt: &mut Prompter<R, W>) -> Result<()>
where
    S: BookStore,
    R: BufRead,
    W: Write,
{
    let keyword = prompt
        .line("Enter keyword to search in title or author: ")?
        .unwrap_or_default();

    let result = api.search_books(&keyword)?;
    if !result.listed_books.is_empty() {
        write!(
            prompt.out(),
            "\nMatches:\n{}",
            render_table(&result.listed_books)
        )?;
    }
    print_messages(prompt.out(), &result.messages)?;
    Ok(())
}

fn handle_update<S, R, W>(api: &mut CatalogApi<S>, prompt: &mut Prompter<R, W>) -> Result<()>
where
    S: BookStore,
    R: BufRead,
    W: Write,
{
    if api.list_books()?.listed_books.is_empty() {
        print_messages(prompt.out(), &[CmdMessage::info("No records to update.")])?;
        return Ok(());
    }

    let Some(id) = prompt.int("Enter the ID of the book to update: ")? else {
        return Ok(());
    };
    let current = first_listed(api.get_book(id)?.listed_books, id)?;
    write!(prompt.out(), "{}", render_details(&current))?;

    let mut update = BookUpdate::new();
    if prompt.confirm("Update title? (y/n): ")? == Some(true) {
        update = update.title(prompt.line("New title: ")?.unwrap_or_default());
    }
    if prompt.confirm("Update author? (y/n): ")? == Some(true) {
        update = update.author(prompt.line("New author: ")?.unwrap_or_default());
    }
    if prompt.confirm("Update ISBN? (y/n): ")? == Some(true) {
        update = update.isbn(prompt.line("New ISBN: ")?.unwrap_or_default());
    }
    if prompt.confirm("Change availability status? (y/n): ")? == Some(true) {
        update = update.available(prompt.int(AVAILABILITY_PROMPT)?.unwrap_or(0) != 0);
    }

    let result = api.update_book(id, update)?;
    print_messages(prompt.out(), &result.messages)?;
    Ok(())
}

fn handle_delete<S, R, W>(api: &mut CatalogApi<S>, prompt: &mut Prompter<R, W>) -> Result<()>
where
    S: BookStore,
    R: BufRead,
    W: Write,
{
    if api.list_books()?.listed_books.is_empty() {
        print_messages(prompt.out(), &[CmdMessage::info("No records to delete.")])?;
        return Ok(());
    }

    let Some(id) = prompt.int("Enter the ID of the book to delete: ")? else {
        return Ok(());
    };
    let target = first_listed(api.get_book(id)?.listed_books, id)?;

    let question = format!(
        "Are you sure you want to delete the book '{}' by {}? (y/n): ",
        target.title, target.author
    );
    match prompt.confirm(&question)? {
        None => return Ok(()),
        Some(false) => {
            print_messages(prompt.out(), &[CmdMessage::info("Delete canceled.")])?;
            return Ok(());
        }
        Some(true) => {}
    }

    let result = api.delete_book(id)?;
    print_messages(prompt.out(), &result.messages)?;
    Ok(())
}

fn first_listed(books: Vec<Book>, id: BookId) -> Result<Book> {
    books
        .into_iter()
        .next()
        .ok_or(CatalogError::BookNotFound(id))
}
