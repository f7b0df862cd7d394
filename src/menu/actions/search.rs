use anyhow::Result;

use super::{NO_ACCOUNTS, cancelled, print_numbered};
use crate::menu::action::{Action, ActionResult, MenuContext};

/// Finds accounts by part of their email.
pub struct SearchAction;

impl Action for SearchAction {
    fn number(&self) -> u32 {
        2
    }

    fn title(&self) -> &str {
        "Search for account"
    }

    fn execute(&self, ctx: &mut MenuContext) -> Result<ActionResult> {
        if ctx.store.load()?.is_empty() {
            ctx.say(NO_ACCOUNTS)?;
            return Ok(ActionResult::Continue);
        }

        let Some(keyword) = ctx.ask("Enter email/username to search: ")? else {
            return cancelled(ctx);
        };

        let results = ctx.store.find_by_email_substring(&keyword)?;
        if results.is_empty() {
            ctx.say("No matching account found.")?;
        } else {
            print_numbered(ctx, &results)?;
        }
        Ok(ActionResult::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Account;
    use crate::menu::actions::testing::{run, temp_store};

    #[test]
    fn test_search_empty_store_skips_prompt() {
        let (store, _temp_dir) = temp_store();
        let (_, output) = run(&SearchAction, &store, &["anything"]);
        assert_eq!(output, "No accounts saved yet.\n");
    }

    #[test]
    fn test_search_matches_case_insensitively() {
        let (store, _temp_dir) = temp_store();
        store
            .save(&[
                Account::new("Alice@Mail.com", "p1"),
                Account::new("bob@web.org", "p2"),
                Account::new("carol@mail.com", "p3"),
            ])
            .unwrap();

        let (_, output) = run(&SearchAction, &store, &["MAIL"]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1. ") && lines[0].contains("Alice@Mail.com"));
        assert!(lines[1].starts_with("2. ") && lines[1].contains("carol@mail.com"));
    }

    #[test]
    fn test_search_no_match() {
        let (store, _temp_dir) = temp_store();
        store.add(Account::new("a@x.com", "p1")).unwrap();

        let (_, output) = run(&SearchAction, &store, &["zzz"]);
        assert_eq!(output, "No matching account found.\n");
    }
}
