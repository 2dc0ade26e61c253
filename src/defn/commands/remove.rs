use crate::commands::{CmdMessage, CmdResult};
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::store::LineBackend;

pub fn run<B: LineBackend>(dict: &Dictionary<B>, word: &str) -> Result<CmdResult> {
    dict.remove(word)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Word '{}' removed from the dictionary.",
        word
    ))))
}
