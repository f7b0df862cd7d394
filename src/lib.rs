//! Locker - a local password-entry manager.
//!
//! Accounts live in a single JSON file and are managed through a numbered
//! text menu. The library exposes the file-backed store, the password
//! generator and the add-flow assembly separately from the menu.

pub mod account;
pub mod assembly;
pub mod config;
pub mod errors;
pub mod generator;
pub mod logging;
pub mod menu;
pub mod storage;

// Re-export commonly used types
pub use account::Account;
pub use assembly::{AccountBuilder, Selector};
pub use config::AppConfig;
pub use errors::{InvalidSelector, StoreError};
pub use generator::generate;
pub use logging::{LogConfig, init_logging};
pub use menu::{Menu, MenuConfig};
pub use storage::AccountStore;
