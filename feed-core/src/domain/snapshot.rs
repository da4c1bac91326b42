//! Network Snapshot
//!
//! Wire DTOs returned by the API and the combined result of one fetch cycle.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// User as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUserDto {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub is_active: bool,
}

impl Entity for ApiUserDto {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Post as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiPostDto {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

impl Entity for ApiPostDto {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// One fetch cycle: the user, their posts and a hash over both
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub users: Vec<ApiUserDto>,
    pub posts: Vec<ApiPostDto>,
    pub raw_hash: i32,
}

impl NetworkSnapshot {
    /// First user of the snapshot, if any
    pub fn primary_user(&self) -> Option<&ApiUserDto> {
        self.users.first()
    }
}
