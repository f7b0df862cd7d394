use anyhow::Result;

use super::{NO_ACCOUNTS, cancelled, print_numbered};
use crate::errors::StoreError;
use crate::menu::action::{Action, ActionResult, MenuContext};

/// Removes one account chosen by its number.
pub struct DeleteAction;

impl Action for DeleteAction {
    fn number(&self) -> u32 {
        3
    }

    fn title(&self) -> &str {
        "Delete account from list"
    }

    fn execute(&self, ctx: &mut MenuContext) -> Result<ActionResult> {
        let accounts = ctx.store.load()?;
        if accounts.is_empty() {
            ctx.say(NO_ACCOUNTS)?;
            return Ok(ActionResult::Continue);
        }
        print_numbered(ctx, &accounts)?;

        loop {
            let Some(answer) = ctx.ask("Enter account number to delete (blank to cancel): ")?
            else {
                return cancelled(ctx);
            };
            let answer = answer.trim();
            if answer.is_empty() {
                ctx.say("Nothing deleted.")?;
                return Ok(ActionResult::Continue);
            }

            let Some(index) = parse_index(answer) else {
                ctx.warn("Please enter a valid number.")?;
                continue;
            };

            match ctx.store.delete_at(index) {
                Ok(deleted) => {
                    ctx.say(&format!("Deleted: {}", deleted))?;
                    return Ok(ActionResult::Continue);
                }
                Err(StoreError::OutOfRange { .. }) => {
                    ctx.warn("Invalid account number.")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Reads a 1-based account number.
///
/// Any integer counts, however large. Zero, negatives and values past
/// `usize::MAX` map to 0, which the store rejects as out of range. Returns
/// `None` only for text that is not an integer.
fn parse_index(answer: &str) -> Option<usize> {
    let (negative, digits) = match answer.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, answer.strip_prefix('+').unwrap_or(answer)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if negative {
        return Some(0);
    }
    Some(digits.parse().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Account;
    use crate::menu::actions::testing::{run, temp_store};

    fn two_accounts() -> Vec<Account> {
        vec![Account::new("a@x.com", "p1"), Account::new("b@y.com", "p2")]
    }

    #[test]
    fn test_delete_empty_store() {
        let (store, _temp_dir) = temp_store();
        let (_, output) = run(&DeleteAction, &store, &["1"]);
        assert_eq!(output, "No accounts saved yet.\n");
    }

    #[test]
    fn test_delete_first() {
        let (store, _temp_dir) = temp_store();
        store.save(&two_accounts()).unwrap();

        let (result, output) = run(&DeleteAction, &store, &["1"]);
        assert_eq!(result, ActionResult::Continue);
        assert!(output.ends_with("Deleted: {\"email\": \"a@x.com\", \"password\": \"p1\"}\n"));
        assert_eq!(store.load().unwrap(), vec![Account::new("b@y.com", "p2")]);
    }

    #[test]
    fn test_delete_reprompts_until_valid() {
        let (store, _temp_dir) = temp_store();
        store.save(&two_accounts()).unwrap();

        let (_, output) = run(&DeleteAction, &store, &["abc", "0", "-1", "3", "2"]);
        assert_eq!(output.matches("Please enter a valid number.").count(), 1);
        assert_eq!(output.matches("Invalid account number.").count(), 3);
        assert!(output.contains("Deleted: {\"email\": \"b@y.com\""));
        assert_eq!(store.load().unwrap(), vec![Account::new("a@x.com", "p1")]);
    }

    #[test]
    fn test_delete_oversized_number_is_out_of_range() {
        let (store, _temp_dir) = temp_store();
        store.save(&two_accounts()).unwrap();

        let answers = ["99999999999999999999999", "-99999999999999999999999", "1"];
        let (_, output) = run(&DeleteAction, &store, &answers);
        assert_eq!(output.matches("Invalid account number.").count(), 2);
        assert!(!output.contains("Please enter a valid number."));
        assert_eq!(store.load().unwrap(), vec![Account::new("b@y.com", "p2")]);
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("2"), Some(2));
        assert_eq!(parse_index("+3"), Some(3));
        assert_eq!(parse_index("007"), Some(7));
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("-1"), Some(0));
        assert_eq!(parse_index("18446744073709551616"), Some(0));
        for bad in ["abc", "1.5", "-", "+", "1e3", "--1"] {
            assert_eq!(parse_index(bad), None, "{}", bad);
        }
    }

    #[test]
    fn test_delete_blank_cancels() {
        let (store, _temp_dir) = temp_store();
        store.save(&two_accounts()).unwrap();

        let (_, output) = run(&DeleteAction, &store, &["  "]);
        assert!(output.ends_with("Nothing deleted.\n"));
        assert_eq!(store.load().unwrap(), two_accounts());
    }

    #[test]
    fn test_delete_end_of_input() {
        let (store, _temp_dir) = temp_store();
        store.save(&two_accounts()).unwrap();

        let (result, output) = run(&DeleteAction, &store, &["9"]);
        assert_eq!(result, ActionResult::Continue);
        assert!(output.ends_with("Cancelled.\n"));
        assert_eq!(store.load().unwrap(), two_accounts());
    }
}
