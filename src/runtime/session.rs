//! Interactive line-driven session
//!
//! Each input line is one UI event, processed to completion before the next
//! is read:
//!
//! - `:upper`, `:dedupe`, `:undo`, ... run the named operation
//! - `:copy`, `:save [name]` write the text out
//! - `:show`, `:stats`, `:help`, `:quit` are session commands
//! - `+text` appends a line to the text
//! - anything else replaces the text (a leading `\` escapes `:` and `+`)

use std::io::{self, BufRead, Write};

use crate::commands::Operation;
use crate::messages::Msg;
use crate::model::AppModel;

use super::effects::{Clipboard, Effects};

const HELP: &str = "\
Operations:
  :upper :lower :title :sentence :toggle :camel :snake :kebab
      apply a case transform (repeat the same one to revert it)
  :collapse-whitespace :remove-empty-lines :remove-line-breaks
  :sort :dedupe :number-lines
      apply a cleanup (revert with :undo)
  :undo :clear
Output:
  :copy           copy the text to the clipboard
  :save [name]    save the text to a file
Session:
  :show :stats :help :quit
Text:
  +line           append a line
  anything else   replace the text";

/// A parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum SessionInput {
    /// A message for `update`
    Message(Msg),
    /// Append a line to the current text
    Append(String),
    Show,
    Stats,
    Help,
    Quit,
    /// Blank line; ignored
    Empty,
}

/// Parse one line of session input
pub fn parse_line(line: &str) -> Result<SessionInput, String> {
    if let Some(rest) = line.strip_prefix('\\') {
        return Ok(SessionInput::Message(Msg::Edit(rest.to_string())));
    }
    if let Some(rest) = line.strip_prefix('+') {
        return Ok(SessionInput::Append(rest.to_string()));
    }
    let Some(command) = line.strip_prefix(':') else {
        if line.is_empty() {
            return Ok(SessionInput::Empty);
        }
        return Ok(SessionInput::Message(Msg::Edit(line.to_string())));
    };

    let mut parts = command.trim().splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim).filter(|s| !s.is_empty());

    match name {
        "copy" => Ok(SessionInput::Message(Msg::Copy)),
        "save" => Ok(SessionInput::Message(Msg::Download {
            filename: arg.map(str::to_string),
        })),
        "show" => Ok(SessionInput::Show),
        "stats" => Ok(SessionInput::Stats),
        "help" | "h" | "?" => Ok(SessionInput::Help),
        "quit" | "q" | "exit" => Ok(SessionInput::Quit),
        _ => name
            .parse::<Operation>()
            .map(|op| SessionInput::Message(op.to_msg())),
    }
}

/// Drives an [`AppModel`] from a line-oriented reader
pub struct Session<C: Clipboard> {
    pub model: AppModel,
    effects: Effects<C>,
    /// Print a `> ` prompt before each line (for terminals)
    prompt: bool,
}

impl<C: Clipboard> Session<C> {
    pub fn new(model: AppModel, effects: Effects<C>) -> Self {
        Self {
            model,
            effects,
            prompt: false,
        }
    }

    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn effects(&self) -> &Effects<C> {
        &self.effects
    }

    /// Run until `:quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        tracing::debug!("session started");
        self.write_prompt(out)?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim_end_matches('\r');

            match parse_line(line) {
                Ok(SessionInput::Quit) => break,
                Ok(parsed) => self.handle(parsed, out)?,
                Err(e) => writeln!(out, "! {}", e)?,
            }

            self.write_prompt(out)?;
        }

        tracing::debug!(history = self.model.engine.history_len(), "session ended");
        Ok(())
    }

    /// Process a single parsed input and print its result
    pub fn handle<W: Write>(&mut self, input: SessionInput, out: &mut W) -> io::Result<()> {
        match input {
            SessionInput::Message(msg) => {
                let is_editing = msg.is_editing();
                self.dispatch(msg);
                self.write_status(out)?;
                if is_editing {
                    self.write_text(out)?;
                    self.write_readout(out)?;
                }
            }
            SessionInput::Append(line) => {
                let text = match self.model.text() {
                    "" => line,
                    current => format!("{}\n{}", current, line),
                };
                self.dispatch(Msg::Edit(text));
                self.write_readout(out)?;
            }
            SessionInput::Show => self.write_text(out)?,
            SessionInput::Stats => self.write_readout(out)?,
            SessionInput::Help => writeln!(out, "{}", HELP)?,
            SessionInput::Empty | SessionInput::Quit => {}
        }
        out.flush()
    }

    fn dispatch(&mut self, msg: Msg) {
        super::dispatch(&mut self.model, &mut self.effects, msg);
    }

    fn write_prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        Ok(())
    }

    fn write_status<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if let Some(status) = self.model.ui.take_status() {
            writeln!(out, "* {}", status)?;
        }
        Ok(())
    }

    fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.model.text())
    }

    fn write_readout<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut readout = format!("({})", self.model.stats().summary());
        if let Some(label) = self.model.active_toggle_label() {
            readout.push_str(&format!(" [active: {}]", label));
        }
        if self.model.engine.can_undo() {
            readout.push_str(&format!(" [undo: {}]", self.model.engine.history_len()));
        }
        writeln!(out, "{}", readout)
    }
}
