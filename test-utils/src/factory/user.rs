//! User factory for creating test user JSON.

use serde_json::{json, Value};

use crate::factory::helpers::{next_id, CREATED_AT};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new().email("ops@example.com").admin(true).build();
/// ```
pub struct UserFactory {
    id: String,
    email: String,
    name: String,
    admin: bool,
}

impl UserFactory {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - name: `"User {id}"`
    /// - admin: `false`
    pub fn new() -> Self {
        let id = next_id();
        Self {
            id: id.to_string(),
            email: format!("user{}@example.com", id),
            name: format!("User {}", id),
            admin: false,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "email": self.email,
            "name": self.name,
            "role": if self.admin { "admin" } else { "user" },
            "createdAt": CREATED_AT,
        })
    }
}

impl Default for UserFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a regular user with default values.
pub fn create_user() -> Value {
    UserFactory::new().build()
}

/// Creates an admin user with default values.
pub fn create_admin() -> Value {
    UserFactory::new().admin(true).build()
}
