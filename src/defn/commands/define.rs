use crate::commands::{CmdMessage, CmdResult, ListedEntry};
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::store::LineBackend;

pub fn run<B: LineBackend>(dict: &Dictionary<B>, word: &str) -> Result<CmdResult> {
    let entry = dict.get(word)?;
    let message = CmdMessage::info(format!("Definition of '{}': {}", word, entry));
    Ok(CmdResult::default()
        .with_listed(vec![ListedEntry {
            word: word.to_string(),
            entry,
        }])
        .with_message(message))
}
