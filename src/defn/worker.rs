//! The single thread that applies mutations to the dictionary file.
//!
//! Requests arrive on one FIFO queue, so adds and removes run strictly in
//! arrival order and never overlap. Each request carries its own reply
//! channel; the caller blocks on it until the worker is done.

use crate::dictionary::RemovePolicy;
use crate::error::{DictError, Result};
use crate::store::{format, LineBackend};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

pub(crate) type Reply = Sender<Result<()>>;

/// Requests sent to the worker thread
pub(crate) enum WorkerCommand {
    /// Append `word: definition`
    Add {
        word: String,
        definition: String,
        reply: Reply,
    },
    /// Drop the first line carrying `word` and rewrite the file
    Remove { word: String, reply: Reply },
    /// Stop the loop; requests queued after this one are dropped unanswered
    Shutdown,
}

pub(crate) fn run<B: LineBackend>(
    backend: Arc<B>,
    policy: RemovePolicy,
    receiver: Receiver<WorkerCommand>,
) {
    tracing::debug!(?policy, "dictionary worker started");

    while let Ok(command) = receiver.recv() {
        match command {
            WorkerCommand::Add {
                word,
                definition,
                reply,
            } => {
                tracing::debug!(%word, "applying add");
                let result = backend.append_line(&format::entry_line(&word, &definition));
                // The caller may have gone away; nothing to do then.
                let _ = reply.send(result);
            }
            WorkerCommand::Remove { word, reply } => {
                tracing::debug!(%word, "applying remove");
                let _ = reply.send(remove(backend.as_ref(), &word, policy));
            }
            WorkerCommand::Shutdown => break,
        }
    }

    tracing::debug!("dictionary worker stopped");
}

fn remove<B: LineBackend>(backend: &B, word: &str, policy: RemovePolicy) -> Result<()> {
    let mut lines = backend.read_lines()?;

    match format::find_line(&lines, word) {
        Some(index) => {
            lines.remove(index);
        }
        None if policy == RemovePolicy::Strict => {
            return Err(DictError::NotFound(word.to_string()));
        }
        None => tracing::debug!(%word, "word absent, rewriting unchanged"),
    }

    backend.replace_lines(&lines)
}
