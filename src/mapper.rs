//! UI Mapper
//!
//! Pure conversion from feed items to the display model.

use feed_core::domain::{Entity, FeedItem};

use crate::models::{UiListItem, UiModel, UiText};

/// Maps feed items for one named feature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiMapper {
    feature_name: String,
}

impl UiMapper {
    pub fn new(feature_name: impl Into<String>) -> Self {
        Self {
            feature_name: feature_name.into(),
        }
    }

    pub fn feature_name(&self) -> &str {
        &self.feature_name
    }

    /// Rows are numbered from 1 in input order
    pub fn map_to_ui(&self, items: &[FeedItem]) -> UiModel {
        let rows = items
            .iter()
            .enumerate()
            .map(|(index, item)| UiListItem {
                id: item.id(),
                title: format!("{}. {}", index + 1, item.title),
                subtitle: item.subtitle.clone(),
                selected: item.user_summary.is_active,
            })
            .collect();

        UiModel::content(
            UiText::new(format!("{} Feed ({})", self.feature_name, items.len())),
            rows,
        )
    }

    pub fn empty_state(&self) -> UiModel {
        UiModel::content(UiText::new("No data"), Vec::new())
    }

    pub fn loading_state(&self) -> UiModel {
        UiModel {
            header: UiText::new("Loading..."),
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn error_state(&self, message: impl Into<String>) -> UiModel {
        UiModel {
            header: UiText::new("Error"),
            items: Vec::new(),
            loading: false,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_core::domain::CoreUser;
    use feed_core::repository::to_feed_items;

    #[test]
    fn test_map_single_item() {
        let mapper = UiMapper::new("Feat603");
        let items = to_feed_items(&[CoreUser::new(5, "Ann".to_string(), true)]);
        let model = mapper.map_to_ui(&items);

        assert_eq!(model.header.value, "Feat603 Feed (1)");
        assert_eq!(model.items.len(), 1);
        assert_eq!(model.items[0].id, 0);
        assert_eq!(model.items[0].title, "1. User Ann");
        assert_eq!(model.items[0].subtitle.as_deref(), Some("Active"));
        assert!(model.items[0].selected);
        assert!(!model.loading);
        assert!(model.error.is_none());
    }

    #[test]
    fn test_map_empty() {
        let model = UiMapper::new("Feat640").map_to_ui(&[]);
        assert!(model.items.is_empty());
        assert_eq!(model.header.value, "Feat640 Feed (0)");
    }

    #[test]
    fn test_rows_numbered_in_order() {
        let users = vec![
            CoreUser::new(9, "Bo".to_string(), false),
            CoreUser::new(3, "Cy".to_string(), true),
        ];
        let model = UiMapper::new("Feat611").map_to_ui(&to_feed_items(&users));
        assert_eq!(model.items[0].title, "1. User Bo");
        assert!(!model.items[0].selected);
        assert_eq!(model.items[1].title, "2. User Cy");
        assert_eq!(model.items[1].id, 1);
    }

    #[test]
    fn test_canned_states_are_exclusive() {
        let mapper = UiMapper::new("Feat603");

        let empty = mapper.empty_state();
        assert_eq!(empty.header.value, "No data");
        assert!(!empty.loading && empty.error.is_none() && empty.items.is_empty());

        let loading = mapper.loading_state();
        assert_eq!(loading.header.value, "Loading...");
        assert!(loading.loading && loading.error.is_none() && loading.items.is_empty());

        let error = mapper.error_state("offline");
        assert_eq!(error.header.value, "Error");
        assert!(!error.loading && error.items.is_empty());
        assert_eq!(error.error.as_deref(), Some("offline"));
    }
}
