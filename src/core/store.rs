//! Backing storage for the log text: read everything, append a chunk.

use crate::errors::AppResult;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

pub trait LogStore {
    fn read_all(&self) -> AppResult<String>;
    fn append(&mut self, text: &str) -> AppResult<()>;

    /// True when the next append starts on a fresh line: the store is empty
    /// or its last byte is `\n`.
    fn at_line_start(&self) -> AppResult<bool> {
        let text = self.read_all()?;
        Ok(text.is_empty() || text.ends_with('\n'))
    }
}

/// The log file on disk. No locking: a single writer is assumed.
#[derive(Debug, Clone)]
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
}

impl LogStore for FileStore {
    fn read_all(&self) -> AppResult<String> {
        Ok(fs::read_to_string(&self.path)?)
    }

    fn at_line_start(&self) -> AppResult<bool> {
        let mut file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(true),
            Err(e) => return Err(e.into()),
        };
        if file.metadata()?.len() == 0 {
            return Ok(true);
        }

        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        Ok(last[0] == b'\n')
    }

    fn append(&mut self, text: &str) -> AppResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(text.as_bytes())?;
        Ok(())
    }
}

/// In-memory log, handy for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    content: String,
}

impl MemoryStore {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl LogStore for MemoryStore {
    fn read_all(&self) -> AppResult<String> {
        Ok(self.content.clone())
    }

    fn append(&mut self, text: &str) -> AppResult<()> {
        self.content.push_str(text);
        Ok(())
    }
}
