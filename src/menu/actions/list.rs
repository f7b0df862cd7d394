use anyhow::Result;

use super::{NO_ACCOUNTS, print_numbered};
use crate::menu::action::{Action, ActionResult, MenuContext};

/// Prints every stored account with its number.
pub struct ListAction;

impl Action for ListAction {
    fn number(&self) -> u32 {
        5
    }

    fn title(&self) -> &str {
        "View all saved accounts"
    }

    fn execute(&self, ctx: &mut MenuContext) -> Result<ActionResult> {
        let accounts = ctx.store.load()?;
        if accounts.is_empty() {
            ctx.say(NO_ACCOUNTS)?;
        } else {
            print_numbered(ctx, &accounts)?;
            log::info!("Listed {} accounts", accounts.len());
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
    fn test_list_empty() {
        let (store, _temp_dir) = temp_store();
        let (_, output) = run(&ListAction, &store, &[]);
        assert_eq!(output, "No accounts saved yet.\n");
    }

    #[test]
    fn test_list_numbers_in_store_order() {
        let (store, _temp_dir) = temp_store();
        store
            .save(&[
                Account::new("b@y.com", "p2"),
                Account::new("a@x.com", "p1").with_field("username", "alice"),
            ])
            .unwrap();

        let (_, output) = run(&ListAction, &store, &[]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"1. {"email": "b@y.com", "password": "p2"}"#,
                r#"2. {"email": "a@x.com", "password": "p1", "username": "alice"}"#,
            ]
        );
    }
}
