use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// One stored credential entry.
///
/// `email` and `password` are always present. Any other key read from the
/// accounts file, or added through the add flow, lives in `extras`.
///
/// Reading is lenient so that hand-edited records are never rejected: a
/// missing or `null` field reads as `""` and any other non-string value is
/// kept as its JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct Account {
    pub email: String,
    pub password: String,
    #[serde(flatten)]
    pub extras: BTreeMap<String, String>,
}

impl Account {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            extras: BTreeMap::new(),
        }
    }

    /// Adds an extra field, returning the account for chaining.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Looks up any field, including `email` and `password`.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "email" => Some(&self.email),
            "password" => Some(&self.password),
            _ => self.extras.get(key).map(String::as_str),
        }
    }

    /// Sets a field, returning the previous value if there was one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            "email" => Some(std::mem::replace(&mut self.email, value)),
            "password" => Some(std::mem::replace(&mut self.password, value)),
            _ => self.extras.insert(key, value),
        }
    }

    /// All fields, required ones first, then extras in key order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        [
            ("email", self.email.as_str()),
            ("password", self.password.as_str()),
        ]
        .into_iter()
        .chain(self.extras.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Case-insensitive substring match on the email field.
    pub fn email_contains(&self, keyword: &str) -> bool {
        self.email
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}

impl From<BTreeMap<String, Value>> for Account {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        let mut account = Account::new("", "");
        for (key, value) in fields {
            let text = match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                other => other.to_string(),
            };
            account.set(key, text);
        }
        account
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.fields().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let key = serde_json::to_string(key).map_err(|_| fmt::Error)?;
            let value = serde_json::to_string(value).map_err(|_| fmt::Error)?;
            write!(f, "{}: {}", key, value)?;
        }
        f.write_str("}")
    }
}
