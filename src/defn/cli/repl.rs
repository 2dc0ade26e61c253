//! The interactive prompt.
//!
//! Reads an action, then the fields that action needs, one line each, until
//! `exit` or end of input. Failures are reported and the loop continues.

use super::print::{print_listing, print_messages};
use defn::commands::{self, CmdMessage};
use defn::store::LineBackend;
use defn::Dictionary;
use std::io::{self, BufRead, Write};

pub(super) fn run<B, R, W>(dict: &Dictionary<B>, mut input: R, out: &mut W) -> io::Result<()>
where
    B: LineBackend,
    R: BufRead,
    W: Write,
{
    loop {
        let action = match prompt(&mut input, out, "Enter action:")? {
            Field::Line(action) => action,
            Field::Unreadable => continue,
            Field::End => return Ok(()),
        };

        match action.as_str() {
            "add" => add(dict, &mut input, out)?,
            "remove" => remove(dict, &mut input, out)?,
            "define" => define(dict, &mut input, out)?,
            "list" => list(dict, out)?,
            "exit" => return Ok(()),
            other => report(out, CmdMessage::warning(format!("Unknown action: {}", other)))?,
        }
    }
}

enum Field {
    Line(String),
    /// Not valid UTF-8; already reported, the current action is abandoned
    Unreadable,
    End,
}

/// Print `label`, then read one trimmed line.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<Field> {
    writeln!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Ok(Field::End),
        Ok(_) => Ok(Field::Line(line.trim().to_string())),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            report(out, CmdMessage::error(format!("Error reading input: {}", e)))?;
            Ok(Field::Unreadable)
        }
        Err(e) => Err(e),
    }
}

fn report<W: Write>(out: &mut W, message: CmdMessage) -> io::Result<()> {
    print_messages(out, &[message])
}

fn add<B: LineBackend, R: BufRead, W: Write>(
    dict: &Dictionary<B>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Field::Line(word) = prompt(input, out, "Enter word:")? else {
        return Ok(());
    };
    let Field::Line(definition) = prompt(input, out, "Enter definition:")? else {
        return Ok(());
    };

    match commands::add::run(dict, &word, &definition) {
        Ok(result) => print_messages(out, &result.messages),
        Err(e) => report(out, CmdMessage::error(format!("Error adding word: {}", e))),
    }
}

fn remove<B: LineBackend, R: BufRead, W: Write>(
    dict: &Dictionary<B>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Field::Line(word) = prompt(input, out, "Enter word:")? else {
        return Ok(());
    };

    match commands::remove::run(dict, &word) {
        Ok(result) => print_messages(out, &result.messages),
        Err(e) => report(out, CmdMessage::error(format!("Error removing word: {}", e))),
    }
}

fn define<B: LineBackend, R: BufRead, W: Write>(
    dict: &Dictionary<B>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Field::Line(word) = prompt(input, out, "Enter word:")? else {
        return Ok(());
    };

    match commands::define::run(dict, &word) {
        Ok(result) => print_messages(out, &result.messages),
        Err(e) => report(out, CmdMessage::error(format!("Error: {}", e))),
    }
}

fn list<B: LineBackend, W: Write>(dict: &Dictionary<B>, out: &mut W) -> io::Result<()> {
    match commands::list::run(dict) {
        Ok(result) => {
            print_listing(out, &result.listed)?;
            print_messages(out, &result.messages)
        }
        Err(e) => report(out, CmdMessage::error(format!("Error listing words: {}", e))),
    }
}
