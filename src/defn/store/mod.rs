//! # Storage Layer
//!
//! The dictionary lives in a single line-oriented text file. Everything that
//! touches that file goes through the [`LineBackend`] trait, so the
//! dictionary and the commands built on top of it can be exercised against an
//! in-memory backend in tests.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production storage, one file on disk
//!   - Appends open the file in append mode (creating it on first use)
//!   - Rewrites go to a temp file in the same directory which is then renamed
//!     over the old file, so readers never see a half-written file
//!
//! - [`memory::MemoryBackend`]: in-memory storage for testing
//!
//! ## Storage Format
//!
//! ```text
//! cat: a small domesticated carnivorous mammal
//! dog: a domesticated descendant of the wolf
//! ```
//!
//! See [`format`] for the parsing rules.

use crate::error::Result;

pub mod format;
pub mod fs;
pub mod memory;

/// Raw line access to the backing storage.
///
/// Implementations are moved into the mutation worker thread and shared with
/// readers. They do no parsing; lines are returned without their terminator.
pub trait LineBackend: Send + Sync + 'static {
    /// Read every line. Fails with an `Io` error of kind `NotFound` when the
    /// storage does not exist yet.
    fn read_lines(&self) -> Result<Vec<String>>;

    /// Append one line, creating the storage if needed.
    fn append_line(&self, line: &str) -> Result<()>;

    /// Replace the whole content with `lines`.
    fn replace_lines(&self, lines: &[String]) -> Result<()>;
}
