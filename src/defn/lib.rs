//! # Defn Architecture
//!
//! Defn keeps a word → definition dictionary in a plain text file, one
//! `word: definition` per line, and lets any number of callers use it at the
//! same time without corrupting the file or losing writes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front-ends                                                 │
//! │  - CLI: interactive prompt + one-shot subcommands (main.rs) │
//! │  - HTTP: axum router, JWT auth, request log (server/)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation, returns CmdResult            │
//! │  - Never prints                                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dictionary (dictionary.rs + worker.rs)                     │
//! │  - add/remove queued to a single worker thread              │
//! │  - get/list read storage directly                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - LineBackend trait: FileBackend, MemoryBackend            │
//! │  - format: parse/render the line format                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//!
//! Mutations are serialized by construction: they can only reach the file
//! through the worker's queue, and the worker handles one request at a time.
//! Reads are not queued. Removes rewrite the file through a temp file and a
//! rename, so a concurrent read never observes a truncated file.
//!
//! ## Testing Strategy
//!
//! 1. **Format** (`store/format.rs`): pure functions, plain unit tests.
//! 2. **Dictionary** (`dictionary.rs`): behavior against `MemoryBackend`,
//!    concurrency against real files in temp dirs.
//! 3. **Commands**: result shape and messages.
//! 4. **Front-ends** (`tests/`): the binary through `assert_cmd`, the router
//!    through `tower::ServiceExt::oneshot`.
//!
//! ## Module Overview
//!
//! - [`dictionary`]: the serialized dictionary
//! - [`store`]: storage abstraction, file format
//! - [`commands`]: operations shared by the front-ends
//! - [`model`]: `Entry` and `Snapshot`
//! - [`server`]: HTTP API
//! - [`config`]: configuration file
//! - [`telemetry`]: logging setup
//! - [`error`]: error types

pub mod commands;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod model;
pub mod server;
pub mod store;
pub mod telemetry;
mod worker;

pub use dictionary::{Dictionary, RemovePolicy};
pub use error::{DictError, Result};
pub use model::{Entry, Snapshot};
