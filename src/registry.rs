//! Feature Registry
//!
//! Builds a contiguous range of numbered features (`Feat{n}`) that share one
//! API client and one network client.

use std::ops::RangeInclusive;
use std::sync::Arc;

use feed_core::domain::{DomainError, DomainResult, NetworkSnapshot};
use feed_core::network::{ApiService, NetworkClient};
use feed_core::repository::{FeedRepository, SnapshotRepository};
use feed_core::FeatureConfig;

use crate::mapper::UiMapper;
use crate::service::FeatureService;

/// Feature numbers shipped by default
pub const DEFAULT_FEATURES: RangeInclusive<u32> = 603..=661;

/// One configured feature and its wiring
pub struct FeatureModule {
    config: FeatureConfig,
    repository: Arc<FeedRepository>,
    service: FeatureService,
}

impl FeatureModule {
    pub fn new(
        config: FeatureConfig,
        api: Arc<dyn ApiService>,
        network_client: Arc<dyn NetworkClient>,
    ) -> DomainResult<Self> {
        config.validate()?;
        let repository = Arc::new(FeedRepository::new(api, config.clone()));
        let service = FeatureService::new(
            repository.clone(),
            UiMapper::new(config.name.clone()),
            network_client,
        );
        Ok(Self {
            config,
            repository,
            service,
        })
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }

    pub fn repository(&self) -> &FeedRepository {
        &self.repository
    }

    pub fn service(&self) -> &FeatureService {
        &self.service
    }
}

/// Ordered set of feature modules
pub struct FeatureRegistry {
    modules: Vec<FeatureModule>,
}

impl FeatureRegistry {
    /// Features `Feat{start}` through `Feat{start + count - 1}` with default config
    pub fn from_range(
        start: u32,
        count: u32,
        api: Arc<dyn ApiService>,
        network_client: Arc<dyn NetworkClient>,
    ) -> DomainResult<Self> {
        let end = start.checked_add(count).ok_or_else(|| {
            DomainError::InvalidInput(format!("feature range {}+{} overflows", start, count))
        })?;
        let configs = (start..end).map(FeatureConfig::for_index).collect();
        Self::from_configs(configs, api, network_client)
    }

    pub fn default_range(
        api: Arc<dyn ApiService>,
        network_client: Arc<dyn NetworkClient>,
    ) -> DomainResult<Self> {
        let start = *DEFAULT_FEATURES.start();
        let count = DEFAULT_FEATURES.end() - start + 1;
        Self::from_range(start, count, api, network_client)
    }

    /// Explicit configs; names must be unique
    pub fn from_configs(
        configs: Vec<FeatureConfig>,
        api: Arc<dyn ApiService>,
        network_client: Arc<dyn NetworkClient>,
    ) -> DomainResult<Self> {
        let mut modules: Vec<FeatureModule> = Vec::with_capacity(configs.len());
        for config in configs {
            if modules.iter().any(|m| m.name() == config.name) {
                return Err(DomainError::Conflict(format!("duplicate feature {}", config.name)));
            }
            modules.push(FeatureModule::new(config, api.clone(), network_client.clone())?);
        }
        log::info!("registered {} feature modules", modules.len());
        Ok(Self { modules })
    }

    pub fn get(&self, name: &str) -> Option<&FeatureModule> {
        self.modules.iter().find(|m| m.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.modules.iter().map(FeatureModule::name).collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureModule> {
        self.modules.iter()
    }

    /// Load one user's snapshot in every feature, stopping at the first error
    pub fn load_all(&self, user_id: i64) -> DomainResult<Vec<(String, NetworkSnapshot)>> {
        let mut snapshots = Vec::with_capacity(self.modules.len());
        for module in &self.modules {
            let snapshot = module.repository.load_snapshot(user_id).map_err(|e| {
                log::error!("{}: snapshot failed: {}", module.name(), e);
                e
            })?;
            snapshots.push((module.name().to_string(), snapshot));
        }
        log::info!("loaded user {} across {} features", user_id, snapshots.len());
        Ok(snapshots)
    }
}
