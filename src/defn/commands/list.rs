use crate::commands::{CmdResult, ListedEntry};
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::store::LineBackend;

/// Lists every well-formed line in file order. Duplicated words appear once
/// per line, each showing the last definition written for that word.
pub fn run<B: LineBackend>(dict: &Dictionary<B>) -> Result<CmdResult> {
    let snapshot = dict.list()?;
    let listed = snapshot
        .iter()
        .map(|(word, entry)| ListedEntry {
            word: word.to_string(),
            entry: entry.clone(),
        })
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}
