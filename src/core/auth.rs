//! Login accounts and the active session.
//!
//! Passwords are stored as bcrypt hashes only; login verifies the
//! submitted password against the stored hash.

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::core::context::Fleet;
use crate::errors::{AppError, AppResult};
use crate::models::user::User;

impl Fleet {
    /// The username match is case-sensitive and the password must verify
    /// exactly. A successful login becomes the active session.
    pub fn login(&mut self, username: &str, password: &str) -> AppResult<User> {
        let user = self
            .data
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned()
            .ok_or(AppError::InvalidCredentials)?;

        if user.password_hash.is_empty() || !verify(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        self.session = Some(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) {
        self.session = None;
    }

    /// Create an account. Usernames are unique case-insensitively and
    /// stored trimmed.
    pub fn add_user(&mut self, username: &str, password: &str) -> AppResult<User> {
        let username = username.trim();
        if self
            .data
            .users
            .iter()
            .any(|u| u.username.to_lowercase() == username.to_lowercase())
        {
            return Err(AppError::DuplicateUsername(username.to_string()));
        }

        let user = User {
            id: self.next_user_id(),
            username: username.to_string(),
            password_hash: hash(password, DEFAULT_COST)?,
        };
        self.data.users.push(user.clone());

        self.record("user-add", &user.username, "account created");
        self.persist()?;
        Ok(user)
    }

    /// Rename an account and, when given, change its password. `None`
    /// keeps the current password.
    pub fn update_user(
        &mut self,
        id: i64,
        username: &str,
        password: Option<&str>,
    ) -> AppResult<User> {
        let username = username.trim();
        if self
            .data
            .users
            .iter()
            .any(|u| u.username.to_lowercase() == username.to_lowercase() && u.id != id)
        {
            return Err(AppError::DuplicateUsername(username.to_string()));
        }

        // Hash up front so a hashing failure cannot leave the record
        // half-updated.
        let new_hash = match password {
            Some(pw) => Some(hash(pw, DEFAULT_COST)?),
            None => None,
        };

        let user = self
            .data
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AppError::UserNotFound(id))?;
        user.username = username.to_string();
        if let Some(h) = new_hash {
            user.password_hash = h;
        }
        let updated = user.clone();

        self.record("user-edit", &updated.username, "account updated");
        self.persist()?;
        Ok(updated)
    }

    /// Delete an account. The default `admin` account and the account of
    /// the active session cannot be removed.
    pub fn remove_user(&mut self, id: i64) -> AppResult<()> {
        let user = self
            .data
            .users
            .iter()
            .find(|u| u.id == id)
            .ok_or(AppError::UserNotFound(id))?;
        if user.username == "admin" {
            return Err(AppError::AdminAccount);
        }
        if self.session.as_ref().is_some_and(|s| s.id == id) {
            return Err(AppError::OwnAccount);
        }

        let username = user.username.clone();
        self.data.users.retain(|u| u.id != id);

        self.record("user-del", &username, "account removed");
        self.persist()
    }
}
