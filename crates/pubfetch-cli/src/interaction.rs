//! Styled terminal messages.

use std::io::Write;

use console::style;

use super::*;

pub static INFO_PREFIX: &str = "ℹ ";
pub static SUCCESS_PREFIX: &str = "✓ ";

#[derive(Debug)]
pub enum ResponseContent<'a> {
  Info(&'a str),
  Success(&'a str),
}

pub trait UserInteraction {
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// Replies on standard output.
#[derive(Debug, Default)]
pub struct Terminal;

impl UserInteraction for Terminal {
  fn reply(&self, content: ResponseContent) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match content {
      ResponseContent::Info(message) => writeln!(stdout, "{}{}", style(INFO_PREFIX).cyan(), message)?,
      ResponseContent::Success(message) =>
        writeln!(stdout, "{}{}", style(SUCCESS_PREFIX).green(), style(message).green())?,
    }
    Ok(())
  }
}
