use crate::commands::{CmdMessage, CmdResult};
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::store::LineBackend;

pub fn run<B: LineBackend>(dict: &Dictionary<B>, word: &str, definition: &str) -> Result<CmdResult> {
    dict.add(word, definition)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Word '{}' added to the dictionary.",
        word
    ))))
}
