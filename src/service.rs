//! Feature Service
//!
//! Orchestrates snapshot loading, feed mapping and UI projection for one
//! feature. Every call is synchronous and single-shot.

use std::sync::Arc;

use feed_core::domain::{CoreModelFactory, CoreUser, DomainResult};
use feed_core::network::{FakeNetworkClient, NetworkClient, NetworkRequest};
use feed_core::repository::{FeedRepository, SnapshotRepository};
use feed_core::FeatureConfig;

use crate::mapper::UiMapper;
use crate::models::UiModel;

pub struct FeatureService {
    repository: Arc<dyn SnapshotRepository>,
    ui_mapper: UiMapper,
    network_client: Arc<dyn NetworkClient>,
}

impl FeatureService {
    pub fn new(
        repository: Arc<dyn SnapshotRepository>,
        ui_mapper: UiMapper,
        network_client: Arc<dyn NetworkClient>,
    ) -> Self {
        Self {
            repository,
            ui_mapper,
            network_client,
        }
    }

    /// Service over the fake API and network client
    pub fn with_defaults(config: FeatureConfig) -> Self {
        let ui_mapper = UiMapper::new(config.name.clone());
        Self::new(
            Arc::new(FeedRepository::with_defaults(config)),
            ui_mapper,
            Arc::new(FakeNetworkClient::new()),
        )
    }

    pub fn ui_mapper(&self) -> &UiMapper {
        &self.ui_mapper
    }

    /// Build the feed screen for one user.
    ///
    /// A snapshot without users yields `empty_state`. The fetched user is
    /// always shown as active; its email is dropped.
    pub fn build_ui_for_user(&self, user_id: i64) -> DomainResult<UiModel> {
        let snapshot = self.repository.load_snapshot(user_id)?;
        let Some(user) = snapshot.primary_user() else {
            log::debug!("{}: no user {} in snapshot", self.ui_mapper.feature_name(), user_id);
            return Ok(self.ui_mapper.empty_state());
        };

        let core_user = CoreUser::new(user.id, user.name.clone(), true);
        let items = self.repository.to_feed_items(&[core_user]);
        Ok(self.ui_mapper.map_to_ui(&items))
    }

    /// Issue a bodiless GET and return the status code
    pub fn ping(&self, path: &str) -> DomainResult<u16> {
        let response = self.network_client.execute(NetworkRequest::get(path))?;
        Ok(response.code)
    }

    /// Run `users_count` factory users through the feed pipeline
    pub fn demo_complex_flow(&self, users_count: usize) -> UiModel {
        let users: Vec<CoreUser> = (0..users_count).map(CoreModelFactory::create_user).collect();
        let items = self.repository.to_feed_items(&users);
        self.ui_mapper.map_to_ui(&items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_core::domain::{DomainError, NetworkSnapshot};

    /// Snapshot source that never finds the user
    struct EmptyRepository;

    impl SnapshotRepository for EmptyRepository {
        fn load_snapshot(&self, _user_id: i64) -> DomainResult<NetworkSnapshot> {
            Ok(NetworkSnapshot {
                users: Vec::new(),
                posts: Vec::new(),
                raw_hash: 1,
            })
        }
    }

    struct FailingRepository;

    impl SnapshotRepository for FailingRepository {
        fn load_snapshot(&self, user_id: i64) -> DomainResult<NetworkSnapshot> {
            Err(DomainError::Internal(format!("backend down for {}", user_id)))
        }
    }

    fn service_over(repository: Arc<dyn SnapshotRepository>) -> FeatureService {
        FeatureService::new(
            repository,
            UiMapper::new("Feat650"),
            Arc::new(FakeNetworkClient::new()),
        )
    }

    #[test]
    fn test_build_ui_for_user() {
        let service = FeatureService::with_defaults(FeatureConfig::for_index(603));
        // odd ids are inactive in the fake API, the service still marks them active
        let model = service.build_ui_for_user(3).unwrap();

        assert_eq!(model.header.value, "Feat603 Feed (1)");
        assert_eq!(model.items.len(), 1);
        assert_eq!(model.items[0].id, 0);
        assert_eq!(model.items[0].title, "1. User User 3");
        assert_eq!(model.items[0].subtitle.as_deref(), Some("Active"));
        assert!(model.items[0].selected);
    }

    #[test]
    fn test_missing_user_gives_empty_state() {
        let service = service_over(Arc::new(EmptyRepository));
        let model = service.build_ui_for_user(1).unwrap();
        assert_eq!(model, service.ui_mapper().empty_state());
    }

    #[test]
    fn test_repository_error_propagates() {
        let service = service_over(Arc::new(FailingRepository));
        let err = service.build_ui_for_user(4).unwrap_err();
        assert_eq!(err, DomainError::Internal("backend down for 4".to_string()));
    }

    #[test]
    fn test_ping() {
        let client = FakeNetworkClient::new().with_route("/down", 503);
        let service = FeatureService::new(
            Arc::new(EmptyRepository),
            UiMapper::new("Feat650"),
            Arc::new(client),
        );
        assert_eq!(service.ping("/health").unwrap(), 200);
        assert_eq!(service.ping("/down").unwrap(), 503);
    }

    #[test]
    fn test_demo_complex_flow() {
        let service = FeatureService::with_defaults(FeatureConfig::for_index(620));
        let model = service.demo_complex_flow(3);

        assert_eq!(model.header.value, "Feat620 Feed (3)");
        let titles: Vec<&str> = model.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["1. User User 0", "2. User User 1", "3. User User 2"]);
        let selected: Vec<bool> = model.items.iter().map(|i| i.selected).collect();
        assert_eq!(selected, vec![true, false, true]);
    }

    #[test]
    fn test_demo_complex_flow_empty() {
        let service = FeatureService::with_defaults(FeatureConfig::for_index(620));
        let model = service.demo_complex_flow(0);
        assert!(model.items.is_empty());
        assert_eq!(model.header.value, "Feat620 Feed (0)");
    }
}
