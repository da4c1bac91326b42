//! Domain Mapping
//!
//! Pure projections from core users to summaries and feed items.

use crate::domain::{CoreUser, FeedItem, UserSummary};
use super::checksum::compute_checksum;

pub fn to_user_summary(user: &CoreUser) -> UserSummary {
    UserSummary {
        id: user.id,
        name: user.name.clone(),
        checksum: compute_checksum(&user.name),
        is_active: user.is_active,
    }
}

/// Feed item ids follow input order and ignore the users' own ids.
pub fn to_feed_items(users: &[CoreUser]) -> Vec<FeedItem> {
    users
        .iter()
        .zip(0i64..)
        .map(|(user, id)| {
            let summary = to_user_summary(user);
            let subtitle = if summary.is_active { "Active" } else { "Inactive" };
            FeedItem {
                id,
                title: format!("User {}", summary.name),
                subtitle: Some(subtitle.to_string()),
                user_summary: summary,
            }
        })
        .collect()
}
