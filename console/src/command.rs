//! One-line commands typed at the console prompt.

use std::str::FromStr;

pub const HELP: &str = "\
commands:
  set <text>    replace the name input
  submit        add the input as a new item, or save the edit
  add <text>    set the input and submit it
  edit <n>      start editing item n
  cancel        stop editing
  delete <n>    delete item n
  refresh       reload the list
  help          show this text
  quit          leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(String),
    Submit,
    Add(String),
    /// 1-based position in the displayed list.
    Edit(usize),
    Cancel,
    Delete(usize),
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{0}` expects an item number")]
    MissingPosition(&'static str),
    #[error("invalid item number `{0}`")]
    InvalidPosition(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match word {
            "" => Err(CommandError::Empty),
            "set" => Ok(Command::Set(rest.to_string())),
            "add" => Ok(Command::Add(rest.to_string())),
            "submit" => Ok(Command::Submit),
            "edit" => position("edit", rest).map(Command::Edit),
            "delete" => position("delete", rest).map(Command::Delete),
            "cancel" => Ok(Command::Cancel),
            "refresh" => Ok(Command::Refresh),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn position(command: &'static str, rest: &str) -> Result<usize, CommandError> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(CommandError::MissingPosition(command));
    }
    rest.parse()
        .map_err(|_| CommandError::InvalidPosition(rest.to_string()))
}
