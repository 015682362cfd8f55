//! Line commands accepted by the interactive front end.

use thiserror::Error;

use crate::domain::catalog::{FormField, PRIORITIES};
use crate::domain::foundation::ValidationError;

pub const HELP: &str = "\
Commands:
  show                     redraw the current screen
  set <field> <text>       type free text into a field
  search <field> <text>    same as set, keeps the suggestion list open
  focus <field>            open a field's suggestion list
  pick <field> <n>         choose the n-th visible suggestion
  close                    close all suggestion lists
  toggle <n|priority>      check or uncheck a priority
  submit                   request a recommendation
  hover <card> <n>         compare the n-th alternative of a card
  reset                    start a new project
  help                     this text
  quit                     leave

Fields: type, domain, scale, team, budget";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Set { field: FormField, text: String },
    Search { field: FormField, text: String },
    Focus(FormField),
    Pick { field: FormField, index: usize },
    Close,
    Toggle(String),
    Submit,
    Hover { card: usize, alternative: usize },
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', try `help`")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a number from 1 upwards")]
    BadIndex(String),

    #[error("no priority '{0}'")]
    UnknownPriority(String),

    #[error(transparent)]
    Field(#[from] ValidationError),
}

/// Parses a 1-based index into a 0-based one.
fn parse_index(raw: &str) -> Result<usize, CommandError> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::BadIndex(raw.to_string())),
    }
}

/// Resolves a priority by 1-based catalog position or by case-insensitive name.
fn resolve_priority(raw: &str) -> Result<String, CommandError> {
    if let Ok(index) = parse_index(raw) {
        return PRIORITIES
            .get(index)
            .map(|p| p.to_string())
            .ok_or_else(|| CommandError::UnknownPriority(raw.to_string()));
    }
    PRIORITIES
        .iter()
        .find(|p| p.eq_ignore_ascii_case(raw))
        .map(|p| p.to_string())
        .ok_or_else(|| CommandError::UnknownPriority(raw.to_string()))
}

impl Command {
    /// Parses one input line. Blank lines are `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match verb.to_ascii_lowercase().as_str() {
            "show" => Command::Show,
            "close" => Command::Close,
            "submit" => Command::Submit,
            "reset" => Command::Reset,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "set" | "search" => {
                let (field, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(CommandError::Usage(if verb.eq_ignore_ascii_case("set") {
                        "set <field> <text>"
                    } else {
                        "search <field> <text>"
                    }));
                }
                let field = FormField::from_key(field)?;
                let text = text.trim().to_string();
                if verb.eq_ignore_ascii_case("set") {
                    Command::Set { field, text }
                } else {
                    Command::Search { field, text }
                }
            }
            "focus" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("focus <field>"));
                }
                Command::Focus(FormField::from_key(rest)?)
            }
            "pick" => {
                let mut parts = rest.split_whitespace();
                let (Some(field), Some(index), None) = (parts.next(), parts.next(), parts.next())
                else {
                    return Err(CommandError::Usage("pick <field> <n>"));
                };
                Command::Pick {
                    field: FormField::from_key(field)?,
                    index: parse_index(index)?,
                }
            }
            "toggle" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("toggle <n|priority>"));
                }
                Command::Toggle(resolve_priority(rest)?)
            }
            "hover" => {
                let mut parts = rest.split_whitespace();
                let (Some(card), Some(alternative), None) =
                    (parts.next(), parts.next(), parts.next())
                else {
                    return Err(CommandError::Usage("hover <card> <n>"));
                };
                Command::Hover {
                    card: parse_index(card)?,
                    alternative: parse_index(alternative)?,
                }
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}
