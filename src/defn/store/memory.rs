use super::LineBackend;
use crate::error::{DictError, Result};
use std::io;
use std::sync::{Mutex, MutexGuard};

/// In-memory storage for testing.
/// Does NOT persist data. `None` stands for a file that does not exist yet.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    lines: Mutex<Option<Vec<String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `lines`, as if the file existed on disk.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: Mutex::new(Some(lines.into_iter().map(Into::into).collect())),
        }
    }

    /// Current content, or `None` if nothing was ever written.
    pub fn lines(&self) -> Option<Vec<String>> {
        self.guard().clone()
    }

    fn guard(&self) -> MutexGuard<'_, Option<Vec<String>>> {
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LineBackend for MemoryBackend {
    fn read_lines(&self) -> Result<Vec<String>> {
        self.guard().clone().ok_or_else(|| {
            DictError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "dictionary file does not exist",
            ))
        })
    }

    fn append_line(&self, line: &str) -> Result<()> {
        self.guard()
            .get_or_insert_with(Vec::new)
            .push(line.to_string());
        Ok(())
    }

    fn replace_lines(&self, lines: &[String]) -> Result<()> {
        *self.guard() = Some(lines.to_vec());
        Ok(())
    }
}
