//! # Serialized Dictionary
//!
//! [`Dictionary`] is the entry point for every dictionary operation. It
//! splits them in two groups:
//!
//! - **Mutations** (`add`, `remove`) are sent to a dedicated worker thread
//!   (see `worker.rs`) and executed one at a time, in arrival order. The
//!   calling thread blocks until its own request has been applied.
//! - **Reads** (`get`, `list`) go straight to the backend from the calling
//!   thread, concurrently with each other and with the worker. Removes replace
//!   the file atomically, so a read sees either the old or the new content.
//!
//! Nothing is cached: every call reads storage, so readers always see the
//! latest state on disk.
//!
//! ## Duplicates
//!
//! `add` never checks for an existing word. A word added twice occupies two
//! lines; `get` and `remove` act on the first of them, while `list` reports
//! the last definition at every position (see [`Snapshot`]).

use crate::error::{DictError, Result};
use crate::model::{Entry, Snapshot};
use crate::store::fs::FileBackend;
use crate::store::{format, LineBackend};
use crate::worker::{self, Reply, WorkerCommand};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// What `remove` does when the word is not in the dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemovePolicy {
    /// Rewrite the file unchanged and report success
    #[default]
    Lenient,
    /// Leave the file alone and report `NotFound`
    Strict,
}

pub struct Dictionary<B: LineBackend = FileBackend> {
    backend: Arc<B>,
    sender: Sender<WorkerCommand>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl Dictionary<FileBackend> {
    /// Open the dictionary stored at `path`. The file is created on the first add.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_backend(FileBackend::new(path), RemovePolicy::default())
    }

    pub fn open_with_policy(path: impl Into<PathBuf>, policy: RemovePolicy) -> Result<Self> {
        Self::with_backend(FileBackend::new(path), policy)
    }
}

impl<B: LineBackend> Dictionary<B> {
    /// Build a dictionary over `backend` and spawn its worker thread.
    pub fn with_backend(backend: B, policy: RemovePolicy) -> Result<Self> {
        let backend = Arc::new(backend);
        let (sender, receiver) = mpsc::channel();

        let worker_backend = Arc::clone(&backend);
        let handle = thread::Builder::new()
            .name("defn-worker".to_string())
            .spawn(move || worker::run(worker_backend, policy, receiver))
            .map_err(DictError::Io)?;

        Ok(Self {
            backend,
            sender,
            worker: Mutex::new(Some(handle)),
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Append `word: definition`. Duplicates are allowed.
    pub fn add(&self, word: &str, definition: &str) -> Result<()> {
        validate("word", word)?;
        validate("definition", definition)?;
        self.request(|reply| WorkerCommand::Add {
            word: word.to_string(),
            definition: definition.to_string(),
            reply,
        })
    }

    /// Remove the first line holding `word`. Every other line, malformed or
    /// not, is written back verbatim.
    pub fn remove(&self, word: &str) -> Result<()> {
        validate("word", word)?;
        self.request(|reply| WorkerCommand::Remove {
            word: word.to_string(),
            reply,
        })
    }

    /// Definition from the first line holding `word`.
    pub fn get(&self, word: &str) -> Result<Entry> {
        let lines = match self.backend.read_lines() {
            Ok(lines) => lines,
            Err(DictError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                return Err(DictError::NotFound(word.to_string()));
            }
            Err(e) => return Err(e),
        };

        lines
            .iter()
            .find_map(|line| match format::parse_line(line) {
                Some((w, definition)) if w == word => Some(Entry::new(definition)),
                _ => None,
            })
            .ok_or_else(|| DictError::NotFound(word.to_string()))
    }

    /// Every well-formed line, in file order. A missing file is an error.
    pub fn list(&self) -> Result<Snapshot> {
        let lines = self.backend.read_lines()?;
        Ok(format::parse(&lines))
    }

    /// Stop the worker after it has drained the requests queued so far.
    ///
    /// Later adds and removes fail with [`DictError::Closed`]; reads keep
    /// working. Calling this more than once is fine.
    pub fn close(&self) -> Result<()> {
        let handle = self
            .worker
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();

        if let Some(handle) = handle {
            // Fails only if the worker is already gone.
            let _ = self.sender.send(WorkerCommand::Shutdown);
            handle
                .join()
                .map_err(|_| DictError::Io(io::Error::other("dictionary worker panicked")))?;
        }
        Ok(())
    }

    fn request(&self, build: impl FnOnce(Reply) -> WorkerCommand) -> Result<()> {
        let (reply, response) = mpsc::channel();
        self.sender
            .send(build(reply))
            .map_err(|_| DictError::Closed)?;
        response.recv().map_err(|_| DictError::Closed)?
    }
}

impl<B: LineBackend> Drop for Dictionary<B> {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

fn validate(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DictError::Validation(format!("{} cannot be empty", field)));
    }
    // Reads trim both sides of a line, so padding would not survive a round trip.
    if value.trim() != value {
        return Err(DictError::Validation(format!(
            "{} cannot start or end with whitespace",
            field
        )));
    }
    if value.contains(':') {
        return Err(DictError::Validation(format!(
            "{} cannot contain ':'",
            field
        )));
    }
    if value.contains(|c: char| c == '\n' || c == '\r') {
        return Err(DictError::Validation(format!(
            "{} cannot contain line breaks",
            field
        )));
    }
    Ok(())
}
