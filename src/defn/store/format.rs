//! Line format of the dictionary file.
//!
//! Each well-formed line reads `word: definition`. Parsing is lenient: any
//! line that does not split into exactly two parts on `:` is skipped without
//! an error.

use crate::model::{Entry, Snapshot};

const SEPARATOR: char = ':';

/// Splits a line into its trimmed word and definition.
///
/// Returns `None` unless the line contains exactly one `:`.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (word, definition) = line.split_once(SEPARATOR)?;
    if definition.contains(SEPARATOR) {
        return None;
    }
    Some((word.trim(), definition.trim()))
}

pub fn parse<S: AsRef<str>>(lines: &[S]) -> Snapshot {
    let mut snapshot = Snapshot::default();
    for line in lines {
        if let Some((word, definition)) = parse_line(line.as_ref()) {
            snapshot.push(word.to_string(), Entry::new(definition));
        }
    }
    snapshot
}

/// Renders lines back into file content, one `\n` after every line.
pub fn format<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}

/// Builds the line appended for a new entry. Inputs are written as given.
pub fn entry_line(word: &str, definition: &str) -> String {
    format!("{}{} {}", word, SEPARATOR, definition)
}

/// Position of the first well-formed line whose word equals `word`.
pub fn find_line<S: AsRef<str>>(lines: &[S], word: &str) -> Option<usize> {
    lines
        .iter()
        .position(|line| matches!(parse_line(line.as_ref()), Some((w, _)) if w == word))
}
