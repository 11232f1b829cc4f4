// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Local user accounts.
//!
//! Accounts live in a TOML credential file:
//!
//! ```toml
//! [credentials.usernames.alice]
//! email = "alice@example.com"
//! name = "alice"
//! password = "$2b$12$<bcrypt salt and hash>"
//!
//! [preauthorized]
//! emails = ["alice@example.com"]
//! ```
//!
//! This only gates the user interface. It is not an authentication protocol.

mod hash;

use std::{
    collections::BTreeMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::{AuthError, ValidationError};

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct CredentialFile {
    #[serde(default)]
    credentials: Credentials,
    #[serde(default)]
    preauthorized: Preauthorized,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Credentials {
    #[serde(default)]
    usernames: BTreeMap<String, UserRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Preauthorized {
    #[serde(default)]
    emails: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub name: String,
    password: String,
}

/// The credential file and the accounts in it.
#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
    file: CredentialFile,
}

impl CredentialStore {
    /// Loads the credential file at `path`. A missing file means no
    /// accounts yet.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Io`] if the file cannot be read and
    /// [`AuthError::Corrupt`] if it is not valid.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AuthError> {
        let path = path.into();

        let file = match fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => CredentialFile::default(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn user(&self, username: &str) -> Option<&UserRecord> {
        self.file.credentials.usernames.get(username)
    }

    pub fn len(&self) -> usize {
        self.file.credentials.usernames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file.credentials.usernames.is_empty()
    }

    pub fn is_preauthorized(&self, email: &str) -> bool {
        self.file.preauthorized.emails.iter().any(|e| e == email)
    }

    fn verify(&self, username: &str, password: &str) -> Option<&UserRecord> {
        self.user(username)
            .filter(|record| hash::verify_password(password, &record.password))
    }

    fn add_user(&mut self, username: &str, email: &str, password: &str) -> Result<(), AuthError> {
        if self.user(username).is_some() {
            return Err(AuthError::UsernameTaken(username.to_string()));
        }
        if self
            .file
            .credentials
            .usernames
            .values()
            .any(|record| record.email == email)
        {
            return Err(AuthError::EmailTaken(email.to_string()));
        }

        let password = hash::hash_password(password)?;

        let mut next = self.file.clone();
        next.credentials.usernames.insert(
            username.to_string(),
            UserRecord {
                email: email.to_string(),
                name: username.to_string(),
                password,
            },
        );
        if !next.preauthorized.emails.iter().any(|e| e == email) {
            next.preauthorized.emails.push(email.to_string());
        }

        self.write(&next)?;
        self.file = next;

        Ok(())
    }

    fn write(&self, file: &CredentialFile) -> Result<(), AuthError> {
        let contents = toml::to_string_pretty(file)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated { display_name: String },
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CurrentUser {
    username: String,
    display_name: String,
}

/// Login state on top of a [`CredentialStore`].
#[derive(Debug)]
pub struct Authenticator {
    store: CredentialStore,
    current: Option<CurrentUser>,
}

impl Authenticator {
    pub fn new(store: CredentialStore) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Attempts to log in. A rejected attempt leaves any current login alone.
    pub fn login(&mut self, username: &str, password: &str) -> LoginOutcome {
        let username = username.trim();

        match self.store.verify(username, password) {
            Some(record) => {
                let display_name = record.name.clone();
                info!("User '{}' logged in", username);
                self.current = Some(CurrentUser {
                    username: username.to_string(),
                    display_name: display_name.clone(),
                });
                LoginOutcome::Authenticated { display_name }
            }
            None => {
                warn!("Rejected login for '{}'", username);
                LoginOutcome::Rejected
            }
        }
    }

    /// Registers a new account. Registering does not log the user in.
    ///
    /// Checks run in order and the first failure is returned: empty fields,
    /// email shape, password length, password confirmation, then whether the
    /// username or email is already registered.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] for bad input,
    /// [`AuthError::UsernameTaken`] or [`AuthError::EmailTaken`] for an
    /// existing account, and [`AuthError::Io`] if the file cannot be saved.
    pub fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<(), AuthError> {
        let username = username.trim();
        let email = email.trim();

        validate_registration(username, email, password, confirm)?;
        self.store.add_user(username, email, password)?;

        info!("Registered user '{}'", username);

        Ok(())
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            info!("User '{}' logged out", user.username);
        }
    }

    /// The logged in username.
    pub fn current_user(&self) -> Option<&str> {
        self.current.as_ref().map(|u| u.username.as_str())
    }

    pub fn display_name(&self) -> Option<&str> {
        self.current.as_ref().map(|u| u.display_name.as_str())
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }
}

fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), ValidationError> {
    for (label, value) in [
        ("Username", username),
        ("Email", email),
        ("Password", password),
        ("Password confirmation", confirm),
    ] {
        if value.is_empty() {
            return Err(ValidationError::EmptyField(label));
        }
    }

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::WeakPassword {
            min: MIN_PASSWORD_LEN,
        });
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(())
}

/// `local@domain.tld`: one `@`, a non-empty local part, and a domain with a
/// dot that is neither its first nor last character.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn authenticator() -> (TempDir, Authenticator) {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::open(dir.path().join("credentials.toml")).unwrap();
        (dir, Authenticator::new(store))
    }

    fn validation(result: Result<(), AuthError>) -> ValidationError {
        match result {
            Err(AuthError::Validation(e)) => e,
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn register_then_login() {
        let (dir, mut auth) = authenticator();

        auth.register("alice", "alice@example.com", "secret1", "secret1")
            .unwrap();
        assert_eq!(auth.current_user(), None);

        assert_eq!(
            auth.login("alice", "secret1"),
            LoginOutcome::Authenticated {
                display_name: "alice".to_string()
            }
        );
        assert_eq!(auth.current_user(), Some("alice"));

        auth.logout();
        assert_eq!(auth.current_user(), None);

        let reopened = CredentialStore::open(dir.path().join("credentials.toml")).unwrap();
        assert_eq!(reopened.len(), 1);
        assert!(reopened.is_preauthorized("alice@example.com"));
    }

    #[test]
    fn wrong_password_is_rejected() {
        let (_dir, mut auth) = authenticator();
        auth.register("alice", "alice@example.com", "secret1", "secret1")
            .unwrap();

        assert_eq!(auth.login("alice", "secret2"), LoginOutcome::Rejected);
        assert_eq!(auth.login("bob", "secret1"), LoginOutcome::Rejected);
        assert_eq!(auth.current_user(), None);
    }

    #[test]
    fn registration_checks_in_order() {
        let (_dir, mut auth) = authenticator();

        assert_eq!(
            validation(auth.register("", "bad", "x", "y")),
            ValidationError::EmptyField("Username")
        );
        assert_eq!(
            validation(auth.register("bob", "bad", "x", "y")),
            ValidationError::InvalidEmail
        );
        assert_eq!(
            validation(auth.register("bob", "bob@example.com", "x", "y")),
            ValidationError::WeakPassword { min: 6 }
        );
        assert_eq!(
            validation(auth.register("bob", "bob@example.com", "secret1", "secret2")),
            ValidationError::PasswordMismatch
        );
        assert!(auth.store().is_empty());
    }

    #[test]
    fn duplicate_username_or_email_is_rejected() {
        let (_dir, mut auth) = authenticator();
        auth.register("alice", "alice@example.com", "secret1", "secret1")
            .unwrap();

        let taken = auth
            .register("alice", "other@example.com", "secret1", "secret1")
            .unwrap_err();
        assert!(matches!(taken, AuthError::UsernameTaken(_)));

        let taken = auth
            .register("bob", "alice@example.com", "secret1", "secret1")
            .unwrap_err();
        assert!(matches!(taken, AuthError::EmailTaken(_)));
        assert_eq!(auth.store().len(), 1);
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@b@c.co"));
    }

    #[test]
    fn reads_a_hand_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");
        let stored = hash::hash_password("secret1").unwrap();
        fs::write(
            &path,
            format!(
                "[credentials.usernames.carol]\nemail = \"carol@example.com\"\nname = \"Carol C\"\npassword = \"{}\"\n",
                stored
            ),
        )
        .unwrap();

        let mut auth = Authenticator::new(CredentialStore::open(&path).unwrap());

        assert_eq!(
            auth.login("carol", "secret1"),
            LoginOutcome::Authenticated {
                display_name: "Carol C".to_string()
            }
        );
        assert_eq!(auth.display_name(), Some("Carol C"));
    }
}
