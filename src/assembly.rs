//! Assembles a new [`Account`] during the add flow.

use std::str::FromStr;

use crate::account::Account;
use crate::errors::InvalidSelector;
use crate::generator;

/// Which optional field an augmentation fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Username,
    ExtraPassword,
    Others,
}

impl Selector {
    pub const ALL: [Selector; 3] = [Selector::Username, Selector::ExtraPassword, Selector::Others];

    /// Menu number the user types to pick this field.
    pub fn choice(self) -> u32 {
        match self {
            Selector::Username => 1,
            Selector::ExtraPassword => 2,
            Selector::Others => 3,
        }
    }

    /// Key stored in the account.
    pub fn key(self) -> &'static str {
        match self {
            Selector::Username => "username",
            Selector::ExtraPassword => "extra_password",
            Selector::Others => "others",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Selector::Username => "Username",
            Selector::ExtraPassword => "Extra password",
            Selector::Others => "Others...",
        }
    }

    /// Parses a menu number such as `"2"`.
    pub fn from_choice(input: &str) -> Result<Self, InvalidSelector> {
        let number: u32 = input
            .trim()
            .parse()
            .map_err(|_| InvalidSelector(input.to_string()))?;
        Self::ALL
            .into_iter()
            .find(|s| s.choice() == number)
            .ok_or_else(|| InvalidSelector(input.to_string()))
    }
}

impl FromStr for Selector {
    type Err = InvalidSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_choice(s)
    }
}

/// Collects the pieces of a new account.
#[derive(Debug)]
pub struct AccountBuilder {
    account: Account,
    generated: bool,
}

impl AccountBuilder {
    /// Starts a new account.
    ///
    /// If `password` is `None` or empty, one of `length` characters is
    /// generated right away; see [`generated_password`](Self::generated_password).
    pub fn new(email: impl Into<String>, password: Option<String>, length: usize) -> Self {
        let (password, generated) = match password {
            Some(password) if !password.is_empty() => (password, false),
            _ => (generator::generate(length), true),
        };
        log::debug!("Assembling account (generated password: {})", generated);

        Self {
            account: Account::new(email, password),
            generated,
        }
    }

    /// The password that was generated for this account, if any.
    pub fn generated_password(&self) -> Option<&str> {
        self.generated.then_some(self.account.password.as_str())
    }

    /// Sets the field for `selector`, returning the value it replaced.
    pub fn augment(&mut self, selector: Selector, value: impl Into<String>) -> Option<String> {
        log::debug!("Adding field '{}'", selector.key());
        self.account.set(selector.key(), value)
    }

    pub fn build(self) -> Account {
        self.account
    }
}
