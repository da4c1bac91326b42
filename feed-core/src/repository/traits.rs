//! Repository Layer - Core Traits
//!
//! Defines the abstract interface the service loads snapshots through.
//! Implementations can call a real API, a fake one, or return canned data.

use crate::domain::{CoreUser, DomainResult, FeedItem, NetworkSnapshot, UserSummary};
use super::mapping;

/// Source of network snapshots for one feature
///
/// The mapping methods are pure and shared by every implementation.
pub trait SnapshotRepository: Send + Sync {
    /// Fetch the user and a page of their posts
    fn load_snapshot(&self, user_id: i64) -> DomainResult<NetworkSnapshot>;

    fn to_user_summary(&self, user: &CoreUser) -> UserSummary {
        mapping::to_user_summary(user)
    }

    fn to_feed_items(&self, users: &[CoreUser]) -> Vec<FeedItem> {
        mapping::to_feed_items(users)
    }
}
