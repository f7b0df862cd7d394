//! The numbered menu actions.

mod add;
mod delete;
mod exit;
mod generate;
mod list;
mod search;

pub use add::AddAction;
pub use delete::DeleteAction;
pub use exit::ExitAction;
pub use generate::GenerateAction;
pub use list::ListAction;
pub use search::SearchAction;

use anyhow::Result;
use std::sync::Arc;

use super::action::{ActionRegistry, ActionResult, MenuContext};
use crate::account::Account;

pub(crate) const NO_ACCOUNTS: &str = "No accounts saved yet.";

/// Registers the six built-in actions.
pub fn register_all(registry: &mut ActionRegistry) {
    registry.register(Arc::new(AddAction));
    registry.register(Arc::new(SearchAction));
    registry.register(Arc::new(DeleteAction));
    registry.register(Arc::new(GenerateAction));
    registry.register(Arc::new(ListAction));
    registry.register(Arc::new(ExitAction));
}

/// Prints `accounts` as `1. {...}`, `2. {...}`, ...
pub(crate) fn print_numbered(ctx: &mut MenuContext, accounts: &[Account]) -> Result<()> {
    for (i, account) in accounts.iter().enumerate() {
        ctx.say(&format!("{}. {}", i + 1, account))?;
    }
    Ok(())
}

/// Input ended in the middle of an action.
pub(crate) fn cancelled(ctx: &mut MenuContext) -> Result<ActionResult> {
    log::debug!("Input ended, action cancelled");
    ctx.say("Cancelled.")?;
    Ok(ActionResult::Continue)
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::menu::action::{Action, ActionResult, MenuContext};
    use crate::menu::prompt::ScriptedPrompt;
    use crate::storage::AccountStore;
    use tempfile::TempDir;

    pub fn temp_store() -> (AccountStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = AccountStore::new(temp_dir.path().join("users.txt"));
        (store, temp_dir)
    }

    /// Runs `action` against `store` with scripted answers, returning the
    /// result and everything printed.
    pub fn run(action: &dyn Action, store: &AccountStore, answers: &[&str]) -> (ActionResult, String) {
        let mut prompt = ScriptedPrompt::new(answers.iter().copied());
        let mut out = Vec::new();
        let result = {
            let mut ctx = MenuContext::new(store, &mut prompt, &mut out);
            action.execute(&mut ctx).expect("action failed")
        };
        (result, String::from_utf8(out).expect("output is utf-8"))
    }
}
