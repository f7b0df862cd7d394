use anyhow::Result;

use crate::generator;
use crate::menu::action::{Action, ActionResult, MenuContext};

/// Shows a fresh random password without storing it.
pub struct GenerateAction;

impl Action for GenerateAction {
    fn number(&self) -> u32 {
        4
    }

    fn title(&self) -> &str {
        "Generate a new secure password"
    }

    fn execute(&self, ctx: &mut MenuContext) -> Result<ActionResult> {
        let password = generator::generate(ctx.password_length);
        log::info!("Generated a {}-character password", ctx.password_length);
        let line = format!("Generated password: {}", ctx.style.secret(&password));
        ctx.say(&line)?;
        Ok(ActionResult::Continue)
    }
}
