use anyhow::{Context, Result};

use super::cancelled;
use crate::assembly::{AccountBuilder, Selector};
use crate::menu::action::{Action, ActionResult, MenuContext};

/// Collects a new account and appends it to the store.
pub struct AddAction;

impl AddAction {
    /// Runs the "Additional Information" sub-menu once.
    ///
    /// Returns `false` if input ended.
    fn additional_information(
        &self,
        builder: &mut AccountBuilder,
        ctx: &mut MenuContext,
    ) -> Result<bool> {
        let heading = ctx.style.heading("-----[Additional Information]-----");
        ctx.say(&heading)?;
        for selector in Selector::ALL {
            ctx.say(&format!("[{}] {}", selector.choice(), selector.label()))?;
        }

        let Some(choice) = ctx.ask("Enter your choice: ")? else {
            return Ok(false);
        };
        let selector = match Selector::from_choice(&choice) {
            Ok(selector) => selector,
            Err(e) => {
                log::debug!("{}", e);
                ctx.warn("Invalid option.")?;
                return Ok(true);
            }
        };

        let question = match selector {
            Selector::Username => "Enter username: ",
            Selector::ExtraPassword => "Enter extra password: ",
            Selector::Others => "Enter other info: ",
        };
        let Some(value) = ctx.ask(question)? else {
            return Ok(false);
        };
        builder.augment(selector, value);
        Ok(true)
    }
}

impl Action for AddAction {
    fn number(&self) -> u32 {
        1
    }

    fn title(&self) -> &str {
        "Add account (email & password)"
    }

    fn heading(&self) -> Option<&str> {
        Some("Add account/email & password")
    }

    fn execute(&self, ctx: &mut MenuContext) -> Result<ActionResult> {
        let Some(email) = ctx.ask("Enter email/username: ")? else {
            return cancelled(ctx);
        };
        let Some(password) = ctx.ask("Enter password (or leave blank to generate one): ")? else {
            return cancelled(ctx);
        };

        let mut builder = AccountBuilder::new(email, Some(password), ctx.password_length);
        if let Some(generated) = builder.generated_password() {
            let line = format!("Generated password: {}", ctx.style.secret(generated));
            ctx.say(&line)?;
        }

        loop {
            let Some(answer) = ctx.ask("Do you want to add more information? (Y/N): ")? else {
                return cancelled(ctx);
            };
            match answer.trim().to_uppercase().as_str() {
                "Y" => {
                    if !self.additional_information(&mut builder, ctx)? {
                        return cancelled(ctx);
                    }
                }
                "N" => break,
                _ => ctx.say("Please enter Y or N")?,
            }
        }

        ctx.store
            .add(builder.build())
            .context("Failed to save account")?;
        let saved = ctx.style.success("Your information is saved...");
        ctx.say(&saved)?;
        Ok(ActionResult::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Account;
    use crate::menu::actions::testing::{run, temp_store};

    #[test]
    fn test_add_minimal() {
        let (store, _temp_dir) = temp_store();
        let (result, output) = run(&AddAction, &store, &["a@x.com", "p1", "n"]);

        assert_eq!(result, ActionResult::Continue);
        assert_eq!(output, "Your information is saved...\n");
        assert_eq!(store.load().unwrap(), vec![Account::new("a@x.com", "p1")]);
    }

    #[test]
    fn test_add_generates_missing_password() {
        let (store, _temp_dir) = temp_store();
        let (_, output) = run(&AddAction, &store, &["a@x.com", "", "N"]);

        let stored = store.load().unwrap().remove(0);
        assert_eq!(stored.password.len(), 12);
        assert!(output.starts_with(&format!("Generated password: {}\n", stored.password)));
    }

    #[test]
    fn test_add_with_augmentations() {
        let (store, _temp_dir) = temp_store();
        let answers = [
            "a@x.com", "p1", "y", "1", "alice", "maybe", "Y", "7", "Y", "3", "note", "Y", "1",
            "alice2", "N",
        ];
        let (_, output) = run(&AddAction, &store, &answers);

        assert_eq!(output.matches("Please enter Y or N").count(), 1);
        assert_eq!(output.matches("Invalid option.").count(), 1);
        assert_eq!(output.matches("[2] Extra password").count(), 4);

        let expected = Account::new("a@x.com", "p1")
            .with_field("username", "alice2")
            .with_field("others", "note");
        assert_eq!(store.load().unwrap(), vec![expected]);
    }

    #[test]
    fn test_add_cancelled_saves_nothing() {
        let (store, _temp_dir) = temp_store();
        let (_, output) = run(&AddAction, &store, &["a@x.com", "p1", "Y", "2"]);

        assert!(output.ends_with("Cancelled.\n"));
        assert!(!store.path().exists());
    }
}
