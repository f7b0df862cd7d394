//! File-backed account store.
//!
//! Every operation reads the whole file, works on the records in memory and,
//! for mutations, writes the whole file back. Nothing is cached between
//! calls, so edits made to the file by hand are picked up immediately.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::account::Account;
use crate::errors::{Result, StoreError};

/// Default accounts file name, relative to the working directory.
pub const DEFAULT_FILE_NAME: &str = "users.txt";

const INDENT: &[u8] = b"    ";

/// Handle to an accounts file.
#[derive(Debug, Clone)]
pub struct AccountStore {
    path: PathBuf,
}

impl AccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all accounts in stored order.
    ///
    /// A missing file, or one that is not a JSON array of objects, yields an
    /// empty list. Field values inside the objects are read leniently (see
    /// [`Account`]). Only read failures other than "not found" are returned
    /// as errors.
    pub fn load(&self) -> Result<Vec<Account>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No accounts file at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Vec<Account>>(&bytes) {
            Ok(accounts) => {
                log::debug!(
                    "Loaded {} accounts from {}",
                    accounts.len(),
                    self.path.display()
                );
                Ok(accounts)
            }
            Err(e) => {
                log::warn!(
                    "Could not parse {}, treating it as empty: {}",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    /// Replaces the file contents with `accounts`.
    ///
    /// The data goes to a temporary file next to the target which is then
    /// renamed over it, so readers see either the old or the new contents.
    pub fn save(&self, accounts: &[Account]) -> Result<()> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        accounts.serialize(&mut ser)?;
        buf.push(b'\n');

        let tmp_path = self.tmp_path();
        if let Err(e) = fs::write(&tmp_path, &buf).and_then(|_| fs::rename(&tmp_path, &self.path))
        {
            let _ = fs::remove_file(&tmp_path);
            log::error!("Failed to write {}: {}", self.path.display(), e);
            return Err(StoreError::Io(e));
        }

        log::debug!(
            "Saved {} accounts to {}",
            accounts.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Appends `account` at the end of the stored list.
    pub fn add(&self, account: Account) -> Result<()> {
        let mut accounts = self.load()?;
        accounts.push(account);
        self.save(&accounts)?;
        log::info!("Added account #{}", accounts.len());
        Ok(())
    }

    /// Returns the accounts whose email contains `keyword`, ignoring case.
    pub fn find_by_email_substring(&self, keyword: &str) -> Result<Vec<Account>> {
        let matches: Vec<Account> = self
            .load()?
            .into_iter()
            .filter(|account| account.email_contains(keyword))
            .collect();
        log::debug!("Search matched {} accounts", matches.len());
        Ok(matches)
    }

    /// Removes and returns the account at the 1-based `index`.
    pub fn delete_at(&self, index: usize) -> Result<Account> {
        let mut accounts = self.load()?;
        let len = accounts.len();
        if index == 0 || index > len {
            log::debug!("Rejected delete of #{} from {} accounts", index, len);
            return Err(StoreError::OutOfRange { index, len });
        }

        let removed = accounts.remove(index - 1);
        self.save(&accounts)?;
        log::info!("Deleted account #{}", index);
        Ok(removed)
    }

    fn tmp_path(&self) -> PathBuf {
        let parent = self.path.parent().unwrap_or(Path::new("."));
        parent.join(format!(
            ".{}.tmp",
            self.path.file_name().unwrap_or_default().to_string_lossy()
        ))
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}
