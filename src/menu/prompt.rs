//! Line input for the menu.

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::VecDeque;

/// Source of user input, one line at a time.
pub trait Prompt {
    /// Shows `prompt` and reads a line without its trailing newline.
    ///
    /// Returns `None` once input has ended.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive input backed by rustyline.
///
/// History is never recorded since answers can be passwords.
pub struct LinePrompt {
    editor: DefaultEditor,
}

impl LinePrompt {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompt for LinePrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) => {
                log::debug!("Interrupted (Ctrl-C)");
                Ok(None)
            }
            Err(ReadlineError::Eof) => {
                log::debug!("EOF received (Ctrl-D)");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Replays a fixed list of answers, then reports end of input.
///
/// Useful for driving the menu without a terminal.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    lines: VecDeque<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
