//! # Commands
//!
//! Business operations shared by every front-end. Each command takes a
//! [`Dictionary`](crate::dictionary::Dictionary), performs one operation and
//! returns a [`CmdResult`]: structured data plus the messages a UI should
//! show. Commands never print; the CLI and the HTTP server decide how to
//! present the result.

use crate::model::Entry;
use serde::Serialize;

pub mod add;
pub mod define;
pub mod list;
pub mod remove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A word paired with the definition it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedEntry {
    pub word: String,
    #[serde(flatten)]
    pub entry: Entry,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<ListedEntry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_listed(mut self, listed: Vec<ListedEntry>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Content of the first message, if any.
    pub fn summary(&self) -> Option<&str> {
        self.messages.first().map(|m| m.content.as_str())
    }
}
