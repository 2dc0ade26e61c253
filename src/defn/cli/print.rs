use colored::Colorize;
use defn::commands::{CmdMessage, ListedEntry, MessageLevel};
use std::io::{self, Write};

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content)?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_listing<W: Write>(out: &mut W, listed: &[ListedEntry]) -> io::Result<()> {
    writeln!(out, "Words in the dictionary:")?;
    for item in listed {
        writeln!(out, "{}: {}", item.word, item.entry)?;
    }
    Ok(())
}
