//! Menu action trait and registry.

use anyhow::Result;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

use crate::menu::prompt::Prompt;
use crate::menu::style::Style;
use crate::storage::AccountStore;

/// What the menu does after an action returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// Back to the menu.
    Continue,
    /// Leave the menu loop.
    Exit,
}

/// Everything an action can touch while it runs.
pub struct MenuContext<'a> {
    pub store: &'a AccountStore,
    pub prompt: &'a mut dyn Prompt,
    pub out: &'a mut dyn Write,
    pub style: Style,
    /// Length of generated passwords.
    pub password_length: usize,
}

impl<'a> MenuContext<'a> {
    pub fn new(
        store: &'a AccountStore,
        prompt: &'a mut dyn Prompt,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            store,
            prompt,
            out,
            style: Style::plain(),
            password_length: crate::generator::DEFAULT_LENGTH,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_password_length(mut self, length: usize) -> Self {
        self.password_length = length;
        self
    }

    /// Prints one line.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    /// Prints one line in the warning color.
    pub fn warn(&mut self, line: &str) -> Result<()> {
        let line = self.style.warning(line);
        self.say(&line)
    }

    /// Flushes pending output, then reads an answer to `question`.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        self.out.flush()?;
        self.prompt.read_line(question)
    }
}

/// One numbered entry of the main menu.
pub trait Action: Send + Sync {
    /// Number the user types to pick this action.
    fn number(&self) -> u32;

    /// Text shown in the menu listing.
    fn title(&self) -> &str;

    /// Banner printed before the action runs; `None` prints nothing.
    fn heading(&self) -> Option<&str> {
        Some(self.title())
    }

    fn execute(&self, ctx: &mut MenuContext) -> Result<ActionResult>;
}

impl fmt::Debug for dyn Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("number", &self.number())
            .field("title", &self.title())
            .finish()
    }
}

/// Actions ordered by their menu number.
#[derive(Default)]
pub struct ActionRegistry {
    actions: BTreeMap<u32, Arc<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an action, replacing any previous one with the same number.
    pub fn register(&mut self, action: Arc<dyn Action>) {
        self.actions.insert(action.number(), action);
    }

    pub fn get(&self, number: u32) -> Option<Arc<dyn Action>> {
        self.actions.get(&number).map(Arc::clone)
    }

    /// Actions in menu order.
    pub fn actions(&self) -> impl Iterator<Item = &Arc<dyn Action>> {
        self.actions.values()
    }
}
