//! Feature Feed
//!
//! UI projection layer on top of `feed-core`:
//! - models: UI primitives and the display model
//! - mapper: Feed items to display model, plus canned states
//! - service: Per-feature orchestration (snapshot -> feed -> UI)
//! - projections: Standalone summary/list helpers
//! - registry: Ranges of numbered features sharing one client

use std::path::PathBuf;

pub mod models;
pub mod mapper;
pub mod service;
pub mod projections;
pub mod registry;

pub use feed_core::{DomainError, DomainResult, FeatureConfig};
pub use mapper::UiMapper;
pub use models::{UiListItem, UiModel, UiText};
pub use registry::{FeatureModule, FeatureRegistry};
pub use service::FeatureService;

/// Name of the log file written under the log directory
pub const LOG_NAME: &str = "FeatureFeed";

/// Route `log` records into a rolling file under `log_dir`
pub fn init_logging(log_dir: PathBuf) -> Result<(), String> {
    rolling_logger::init_logger(log_dir, LOG_NAME)
}
