//! # Bookshelf Architecture
//!
//! Bookshelf keeps a small book catalog in a plain text file, one record per
//! line. The binary is an interactive menu on top of a library that knows
//! nothing about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, table output, exit codes             │
//! │  - The ONLY place that touches stdin/stdout/stderr          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / list / search / get / update / delete / config     │
//! │  - Load everything, change it, write it back                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## File Format
//!
//! ```text
//! 1|Dune|Frank Herbert|978-0441013593|1
//! 2|Emma|Jane Austen|978-0141439587|0
//! ```
//!
//! Fields are id, title, author, ISBN and availability (`1` available, `0`
//! borrowed). See [`model`] for parsing rules.
//!
//! ## Single Writer
//!
//! There is no locking. Running two instances against the same file can lose
//! updates; the catalog assumes one operator at a time.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Book`, field limits and the line codec
//! - [`config`]: Configuration and catalog file resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
