//! Text menu front end.
//!
//! The menu prints the numbered options, reads a choice and hands control to
//! the matching [`Action`]. Errors from an action are reported and the menu
//! carries on; only a failure to write to the output ends the loop early.

pub mod action;
pub mod actions;
pub mod prompt;
pub mod style;

use anyhow::Result;
use std::io::Write;

use crate::generator::DEFAULT_LENGTH;
use crate::storage::AccountStore;

use action::{ActionRegistry, ActionResult, MenuContext};
use actions::register_all;
use prompt::Prompt;
use style::Style;

pub use action::Action;

const TITLE: &str = "================[Locker]================";
const CHOICE_PROMPT: &str = "Enter your choice: ";
const PAUSE_PROMPT: &str = "Press enter to continue...";

/// Settings for the menu.
#[derive(Debug, Clone)]
pub struct MenuConfig {
    pub style: Style,
    /// Length of generated passwords.
    pub password_length: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            style: Style::default(),
            password_length: DEFAULT_LENGTH,
        }
    }
}

/// The main menu loop over one account store.
pub struct Menu {
    store: AccountStore,
    registry: ActionRegistry,
    config: MenuConfig,
}

impl Menu {
    pub fn with_config(store: AccountStore, config: MenuConfig) -> Self {
        let mut registry = ActionRegistry::new();
        register_all(&mut registry);
        Self {
            store,
            registry,
            config,
        }
    }

    /// Runs until the user exits or input ends.
    pub fn run(&self, prompt: &mut dyn Prompt, out: &mut dyn Write) -> Result<()> {
        log::info!("Menu started on {}", self.store.path().display());

        loop {
            self.render(out)?;
            out.flush()?;

            let Some(line) = prompt.read_line(CHOICE_PROMPT)? else {
                writeln!(out, "Exiting...")?;
                break;
            };

            if let ActionResult::Exit = self.dispatch(line.trim(), prompt, out)? {
                break;
            }

            writeln!(out)?;
            out.flush()?;
            if prompt.read_line(PAUSE_PROMPT)?.is_none() {
                break;
            }
        }

        log::info!("Menu exited");
        Ok(())
    }

    fn render(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.config.style.heading(TITLE))?;
        for action in self.registry.actions() {
            writeln!(out, "[{}] {}", action.number(), action.title())?;
        }
        Ok(())
    }

    /// Runs the action picked by `choice`, reporting bad input and failures.
    fn dispatch(
        &self,
        choice: &str,
        prompt: &mut dyn Prompt,
        out: &mut dyn Write,
    ) -> Result<ActionResult> {
        let style = self.config.style;

        let Ok(number) = choice.parse::<u32>() else {
            writeln!(out, "{}", style.warning("Invalid input, please enter a number."))?;
            return Ok(ActionResult::Continue);
        };
        let Some(action) = self.registry.get(number) else {
            log::debug!("No action numbered {}", number);
            writeln!(out, "{}", style.warning("Invalid choice, please try again..."))?;
            return Ok(ActionResult::Continue);
        };

        if let Some(heading) = action.heading() {
            writeln!(out, "{}", style.heading(&format!("-----[{}]-----", heading)))?;
        }

        log::debug!("Running action {}", number);
        let start = std::time::Instant::now();
        let result = {
            let mut ctx = MenuContext::new(&self.store, prompt, out)
                .with_style(style)
                .with_password_length(self.config.password_length);
            action.execute(&mut ctx)
        };
        log::debug!("Action {} completed in {:?}", number, start.elapsed());

        match result {
            Ok(result) => Ok(result),
            Err(e) => {
                log::error!("Action {} failed: {:#}", number, e);
                writeln!(out, "{}", style.error(&format!("Error: {:#}", e)))?;
                Ok(ActionResult::Continue)
            }
        }
    }
}
