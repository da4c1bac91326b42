//! User Entities
//!
//! The core user record, its summary projection and the factory used to
//! synthesize users for demo flows.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A user as seen by the feature layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreUser {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub is_active: bool,
}

impl CoreUser {
    pub fn new(id: i64, name: String, is_active: bool) -> Self {
        Self {
            id,
            name,
            email: None,
            is_active,
        }
    }

    pub fn with_email(mut self, email: String) -> Self {
        self.email = Some(email);
        self
    }
}

impl Entity for CoreUser {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Compact per-user projection carried by feed items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    /// String hash of `name`. Unrelated to the snapshot hash.
    pub checksum: i32,
    pub is_active: bool,
}

impl Entity for UserSummary {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Builds users from a sequential index
pub struct CoreModelFactory;

impl CoreModelFactory {
    /// Even indices are active, odd ones inactive.
    pub fn create_user(index: usize) -> CoreUser {
        CoreUser::new(index as i64, format!("User {}", index), index % 2 == 0)
            .with_email(format!("user{}@example.com", index))
    }
}
