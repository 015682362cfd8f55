//! Terminal front end: command parsing and text rendering.

mod command;
mod render;

pub use command::{Command, CommandError, HELP};
pub use render::{Renderer, FORM_TITLE, PRIORITIES_HEADING};
