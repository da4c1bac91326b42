//! Projection Helpers
//!
//! Standalone summary and list builders shared by every feature.

use feed_core::domain::{CoreUser, UserSummary};
use feed_core::repository::to_user_summary;

use crate::models::{UiListItem, UiModel, UiText};

pub fn transform_users_to_summaries(users: &[CoreUser]) -> Vec<UserSummary> {
    users.iter().map(to_user_summary).collect()
}

/// Rows keyed by list index, titled with the bare name
pub fn map_summaries_to_ui_items(summaries: &[UserSummary]) -> Vec<UiListItem> {
    summaries
        .iter()
        .zip(0i64..)
        .map(|(summary, index)| {
            let subtitle = if summary.is_active { "Active" } else { "Inactive" };
            UiListItem {
                id: index,
                title: summary.name.clone(),
                subtitle: Some(subtitle.to_string()),
                selected: summary.is_active,
            }
        })
        .collect()
}

/// `count` synthetic users, even indices active
pub fn create_large_ui_model(count: usize) -> UiModel {
    let summaries: Vec<UserSummary> = (0..count)
        .map(|i| UserSummary {
            id: i as i64,
            name: format!("User-{}", i),
            checksum: (i as i32).wrapping_mul(17),
            is_active: i % 2 == 0,
        })
        .collect();

    UiModel::content(
        UiText::new(format!("Large model {}", count)),
        map_summaries_to_ui_items(&summaries),
    )
}

/// Every third user, starting with the first, is inactive
pub fn build_sequential_users(count: usize) -> Vec<CoreUser> {
    (0..count)
        .map(|i| CoreUser::new(i as i64, format!("User-{}", i), i % 3 != 0))
        .collect()
}

pub fn map_to_ui_text_list(users: &[CoreUser]) -> Vec<UiText> {
    users.iter().map(|user| UiText::new(format!("User: {}", user.name))).collect()
}

/// Model `i` holds `(i % 20) + 1` items
pub fn build_many_ui_models(repeat: usize) -> Vec<UiModel> {
    (0..repeat).map(|i| create_large_ui_model(i % 20 + 1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_large_ui_model() {
        let model = create_large_ui_model(3);
        assert_eq!(model.header.value, "Large model 3");

        let titles: Vec<&str> = model.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["User-0", "User-1", "User-2"]);
        let selected: Vec<bool> = model.items.iter().map(|i| i.selected).collect();
        assert_eq!(selected, vec![true, false, true]);
        assert_eq!(model.items[1].subtitle.as_deref(), Some("Inactive"));
    }

    #[test]
    fn test_sequential_users() {
        let users = build_sequential_users(4);
        let active: Vec<bool> = users.iter().map(|u| u.is_active).collect();
        assert_eq!(active, vec![false, true, true, false]);
        assert_eq!(users[2].name, "User-2");
        assert!(users.iter().all(|u| u.email.is_none()));
    }

    #[test]
    fn test_summaries_and_rows() {
        let users = build_sequential_users(2);
        let summaries = transform_users_to_summaries(&users);
        assert_eq!(summaries[1].name, "User-1");
        assert_eq!(summaries[1].checksum, feed_core::repository::compute_checksum("User-1"));

        let rows = map_summaries_to_ui_items(&summaries);
        assert_eq!(rows[0].id, 0);
        assert!(!rows[0].selected);
        assert!(rows[1].selected);
    }

    #[test]
    fn test_text_list() {
        let texts = map_to_ui_text_list(&build_sequential_users(2));
        assert_eq!(texts, vec![UiText::new("User: User-0"), UiText::new("User: User-1")]);
    }

    #[test]
    fn test_many_models_wrap_at_twenty() {
        let models = build_many_ui_models(22);
        assert_eq!(models.len(), 22);
        assert_eq!(models[0].items.len(), 1);
        assert_eq!(models[19].items.len(), 20);
        assert_eq!(models[20].items.len(), 1);
        assert_eq!(models[21].header.value, "Large model 2");
    }
}
