//! User directory (CRUD over managed accounts)

use tracing::info;
use super::{NewUser, Role, User, UserError, UserFilter, UserId, UserStatus, UserUpdate};

/// In-memory user registry
#[derive(Clone, Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
    next_id: UserId,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild from persisted users; invalid or duplicate entries are dropped
    pub fn from_users(users: Vec<User>) -> Self {
        let mut dir = Self::new();
        for user in users {
            let valid = validate_username(&user.username).is_ok()
                && validate_email(&user.email).is_ok()
                && !user.display_name.trim().is_empty()
                && dir.get(user.id).is_none()
                && dir.find_by_username(&user.username).is_none();
            if valid {
                dir.next_id = dir.next_id.max(user.id.saturating_add(1));
                dir.users.push(user);
            }
        }
        dir
    }

    /// Add a user, returning the assigned id
    pub fn add(&mut self, new: NewUser, now_ms: f64) -> Result<UserId, UserError> {
        let username = new.username.trim().to_string();
        validate_username(&username)?;
        let email = new.email.trim().to_string();
        validate_email(&email)?;
        if self.find_by_username(&username).is_some() {
            return Err(UserError::DuplicateUsername(username));
        }

        let display_name = match new.display_name.trim() {
            "" => username.clone(),
            name => name.to_string(),
        };

        let id = self.allocate_id()?;
        info!(user = id, username = %username, "user added");
        self.users.push(User {
            id,
            username,
            display_name,
            email,
            role: new.role,
            status: UserStatus::Active,
            created_at: now_ms,
        });
        Ok(id)
    }

    /// Apply a partial update; nothing changes if any field is invalid
    pub fn update(&mut self, id: UserId, update: UserUpdate) -> Result<&User, UserError> {
        let idx = self.index_of(id)?;
        let mut user = self.users[idx].clone();

        if let Some(username) = update.username {
            let username = username.trim().to_string();
            validate_username(&username)?;
            if self.find_by_username(&username).is_some_and(|u| u.id != id) {
                return Err(UserError::DuplicateUsername(username));
            }
            user.username = username;
        }
        if let Some(display_name) = update.display_name {
            let display_name = display_name.trim().to_string();
            if display_name.is_empty() {
                return Err(UserError::EmptyDisplayName);
            }
            user.display_name = display_name;
        }
        if let Some(email) = update.email {
            let email = email.trim().to_string();
            validate_email(&email)?;
            user.email = email;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(status) = update.status {
            user.status = status;
        }

        if self.users[idx].is_active_admin() && !user.is_active_admin() {
            self.ensure_other_admin(id)?;
        }

        self.users[idx] = user;
        Ok(&self.users[idx])
    }

    /// Change only the status
    pub fn set_status(&mut self, id: UserId, status: UserStatus) -> Result<(), UserError> {
        self.update(
            id,
            UserUpdate {
                status: Some(status),
                ..Default::default()
            },
        )
        .map(|_| ())
    }

    /// Remove a user
    pub fn remove(&mut self, id: UserId) -> Result<User, UserError> {
        let idx = self.index_of(id)?;
        if self.users[idx].is_active_admin() {
            self.ensure_other_admin(id)?;
        }
        info!(user = id, "user removed");
        Ok(self.users.remove(idx))
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Case-insensitive username lookup
    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        let username = username.trim();
        self.users
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(username))
    }

    /// All users in creation order
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Users matching a filter, in creation order
    pub fn filter(&self, filter: &UserFilter) -> Vec<&User> {
        self.users.iter().filter(|u| filter.matches(u)).collect()
    }

    pub fn count_by_role(&self, role: Role) -> usize {
        self.users.iter().filter(|u| u.role == role).count()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Next free id. Restored data may push the counter to its ceiling, in which
    /// case the lowest unused id is handed out instead.
    fn allocate_id(&mut self) -> Result<UserId, UserError> {
        let id = self.next_id.max(1);
        if self.get(id).is_none() {
            self.next_id = id.saturating_add(1);
            return Ok(id);
        }
        (1..=UserId::MAX)
            .find(|&candidate| self.get(candidate).is_none())
            .ok_or(UserError::IdsExhausted)
    }

    fn index_of(&self, id: UserId) -> Result<usize, UserError> {
        self.users
            .iter()
            .position(|u| u.id == id)
            .ok_or(UserError::NotFound(id))
    }

    fn ensure_other_admin(&self, id: UserId) -> Result<(), UserError> {
        if self.users.iter().any(|u| u.id != id && u.is_active_admin()) {
            Ok(())
        } else {
            Err(UserError::LastAdmin(id))
        }
    }
}

fn validate_username(username: &str) -> Result<(), UserError> {
    let valid = !username.is_empty()
        && username.len() <= 32
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(UserError::InvalidUsername(username.to_string()))
    }
}

fn validate_email(email: &str) -> Result<(), UserError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(UserError::InvalidEmail(email.to_string())),
    }
}
