use std::fs::File;
use std::path::{Path, PathBuf};

use serde_json;

use errors::*;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
}

/// The catalog. Every book lives in memory; the whole collection is
/// rewritten to `path` after each mutation, then copied to `backup_path`.
pub struct Library {
    path: PathBuf,
    backup_path: PathBuf,
    books: Vec<BookRecord>,
}

impl Library {
    /// Open the catalog stored at `path`. A missing or unreadable snapshot
    /// yields an empty catalog.
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(path: P, backup_path: Q) -> Library {
        let books = load_books(path.as_ref());

        Library {
            path: path.as_ref().to_path_buf(),
            backup_path: backup_path.as_ref().to_path_buf(),
            books: books,
        }
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn add(&mut self, book: BookRecord) -> Result<()> {
        self.books.push(book);

        self.save()
    }

    /// Remove every book titled `title`, ignoring case. Returns whether
    /// anything was removed; the snapshot is only rewritten when it was.
    pub fn remove(&mut self, title: &str) -> Result<bool> {
        let needle = title.to_lowercase();
        let before = self.books.len();

        self.books.retain(|book| book.title.to_lowercase() != needle);

        if self.books.len() == before {
            return Ok(false);
        }

        self.save()?;

        Ok(true)
    }

    /// Books whose title or author contains `query`, ignoring case. An
    /// empty query matches every book.
    pub fn search(&self, query: &str) -> Vec<&BookRecord> {
        let needle = query.to_lowercase();

        self.books
            .iter()
            .filter(|book| {
                         book.title.to_lowercase().contains(&needle) ||
                         book.author.to_lowercase().contains(&needle)
                     })
            .collect()
    }

    /// Flip the read flag on the first book titled `title` (ignoring case)
    /// and return a copy of it. Only the first match is touched, even when
    /// the title is duplicated.
    pub fn toggle_read(&mut self, title: &str) -> Result<Option<BookRecord>> {
        let needle = title.to_lowercase();

        let pos = self.books
            .iter()
            .position(|book| book.title.to_lowercase() == needle);

        match pos {
            Some(i) => {
                self.books[i].read = !self.books[i].read;
                let updated = self.books[i].clone();

                self.save()?;

                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }

    /// `(total, read, percentage read)`, with the percentage defined as 0
    /// for an empty catalog.
    pub fn stats(&self) -> (usize, usize, f64) {
        let total = self.books.len();
        let read = self.books.iter().filter(|book| book.read).count();

        let percentage = if total > 0 {
            read as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        (total, read, percentage)
    }

    fn save(&self) -> Result<()> {
        self.write_snapshot(&self.path)?;
        self.write_snapshot(&self.backup_path)?;

        Ok(())
    }

    fn write_snapshot(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &self.books)?;

        Ok(())
    }
}

fn load_books(path: &Path) -> Vec<BookRecord> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return Vec::new(),
    };

    serde_json::from_reader(file).unwrap_or_else(|_| Vec::new())
}
