use std::process::ExitCode;

use locker::menu::prompt::LinePrompt;
use locker::menu::style::Style;
use locker::{AccountStore, AppConfig, Menu, MenuConfig, init_logging};

fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(2);
        }
    };

    if let Err(e) = init_logging(&config.log) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let mut prompt = match LinePrompt::new() {
        Ok(prompt) => prompt,
        Err(e) => {
            log::error!("Could not open terminal input: {}", e);
            eprintln!("Error: could not open terminal input: {:#}", e);
            return ExitCode::from(1);
        }
    };

    let store = AccountStore::new(config.store_path.clone());
    let menu = Menu::with_config(
        store,
        MenuConfig {
            style: Style::new(config.color),
            password_length: config.password_length,
        },
    );

    match menu.run(&mut prompt, &mut std::io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Menu aborted: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
