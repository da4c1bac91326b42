//! Feature Configuration
//!
//! One `FeatureConfig` parametrizes a feature module: its display name,
//! how many posts a snapshot fetches and whether the pipeline logs.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

pub const DEFAULT_PAGE_SIZE: usize = 20;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Display name, e.g. "Feat603"
    pub name: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_true")]
    pub enable_logging: bool,
}

impl FeatureConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            page_size: DEFAULT_PAGE_SIZE,
            enable_logging: true,
        }
    }

    /// Config for the numbered feature `Feat{index}`
    pub fn for_index(index: u32) -> Self {
        Self::new(format!("Feat{}", index))
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_logging(mut self, enable_logging: bool) -> Self {
        self.enable_logging = enable_logging;
        self
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> DomainResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidInput("feature name must not be empty".to_string()));
        }
        if self.page_size == 0 {
            return Err(DomainError::InvalidInput(format!(
                "{}: page_size must be greater than 0",
                self.name
            )));
        }
        Ok(())
    }
}
