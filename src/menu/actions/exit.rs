use anyhow::Result;

use crate::menu::action::{Action, ActionResult, MenuContext};

/// Leaves the menu.
pub struct ExitAction;

impl Action for ExitAction {
    fn number(&self) -> u32 {
        6
    }

    fn title(&self) -> &str {
        "Exit"
    }

    fn heading(&self) -> Option<&str> {
        None
    }

    fn execute(&self, ctx: &mut MenuContext) -> Result<ActionResult> {
        log::info!("User requested exit");
        ctx.say("Exiting...")?;
        Ok(ActionResult::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::actions::testing::{run, temp_store};

    #[test]
    fn test_exit_action() {
        let (store, _temp_dir) = temp_store();
        let (result, output) = run(&ExitAction, &store, &[]);

        assert_eq!(result, ActionResult::Exit);
        assert_eq!(output, "Exiting...\n");
    }
}
