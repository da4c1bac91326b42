//! UI Models
//!
//! Display structures handed to the host UI.

use serde::{Deserialize, Serialize};

/// Plain display text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiText {
    pub value: String,
}

impl UiText {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

impl std::fmt::Display for UiText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// One row of a rendered list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiListItem {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub selected: bool,
}

/// Everything a feature screen renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiModel {
    pub header: UiText,
    pub items: Vec<UiListItem>,
    pub loading: bool,
    pub error: Option<String>,
}

impl UiModel {
    /// A model showing `items` with no loading or error flag
    pub fn content(header: UiText, items: Vec<UiListItem>) -> Self {
        Self {
            header,
            items,
            loading: false,
            error: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_model() {
        let model = UiModel::content(UiText::new("Header"), Vec::new());
        assert!(!model.loading);
        assert!(!model.is_error());
        assert_eq!(model.header.to_string(), "Header");
    }

    #[test]
    fn test_json_shape() {
        let model = UiModel::content(
            UiText::new("Feed"),
            vec![UiListItem {
                id: 0,
                title: "1. User Ann".to_string(),
                subtitle: None,
                selected: true,
            }],
        );
        let value: serde_json::Value = serde_json::from_str(&model.to_json().unwrap()).unwrap();
        assert_eq!(value["header"]["value"], "Feed");
        assert_eq!(value["items"][0]["title"], "1. User Ann");
        assert_eq!(value["error"], serde_json::Value::Null);
    }
}
