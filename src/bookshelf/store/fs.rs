use super::{parse_lines, render_lines, BookStore};
use crate::error::{CatalogError, Result};
use crate::model::Book;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// The production store: one pipe-delimited text file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent).map_err(CatalogError::Io)
            }
            _ => Ok(()),
        }
    }
}

impl BookStore for FileStore {
    fn load_books(&self) -> Result<Vec<Book>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No catalog at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(CatalogError::Io(e)),
        };

        // Older files may hold Latin-1 text or a character cut at a field limit.
        let books = parse_lines(&String::from_utf8_lossy(&bytes));
        tracing::debug!("Loaded {} records from {}", books.len(), self.path.display());
        Ok(books)
    }

    fn save_books(&mut self, books: &[Book]) -> Result<()> {
        self.ensure_parent_dir()?;
        fs::write(&self.path, render_lines(books)).map_err(CatalogError::Io)?;
        tracing::debug!("Wrote {} records to {}", books.len(), self.path.display());
        Ok(())
    }

    fn append_book(&mut self, book: &Book) -> Result<()> {
        self.ensure_parent_dir()?;
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(CatalogError::Io)?;
        if missing_final_newline(&mut file).map_err(CatalogError::Io)? {
            writeln!(file).map_err(CatalogError::Io)?;
        }
        writeln!(file, "{}", book.to_line()).map_err(CatalogError::Io)?;
        tracing::debug!("Appended record {} to {}", book.id, self.path.display());
        Ok(())
    }
}

fn missing_final_newline(file: &mut fs::File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
