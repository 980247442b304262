//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for catalog operations, whatever the UI.
//!
//! It dispatches to `commands/*.rs` and returns `Result<CmdResult>`. It does
//! no business logic, no terminal I/O and no formatting.
//!
//! `CatalogApi<S: BookStore>` is generic over the storage backend:
//! - Production: `CatalogApi<FileStore>`
//! - Testing: `CatalogApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{BookId, NewBook};
use crate::store::BookStore;
use std::path::{Path, PathBuf};

/// The main API facade for catalog operations.
pub struct CatalogApi<S: BookStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: BookStore> CatalogApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn add_book(&mut self, fields: NewBook) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, fields)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_books(&self, keyword: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, keyword)
    }

    pub fn get_book(&self, id: BookId) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn update_book(
        &mut self,
        id: BookId,
        update: commands::BookUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete_book(&mut self, id: BookId) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{BookUpdate, CmdMessage, CmdResult, MessageLevel};
