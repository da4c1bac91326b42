//! Feed Item Entity

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::user::UserSummary;

/// One row of a feature feed before UI projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Position in the mapped input, starting at 0
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub user_summary: UserSummary,
}

impl Entity for FeedItem {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}
