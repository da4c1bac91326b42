//! Feed Repository
//!
//! API-backed snapshot source for one feature.

use std::sync::Arc;

use crate::config::FeatureConfig;
use crate::domain::{ApiPostDto, ApiUserDto, DomainResult, NetworkSnapshot};
use crate::network::{ApiService, FakeApiService};
use super::checksum::HashCombiner;
use super::traits::SnapshotRepository;

/// Loads snapshots through an `ApiService`
pub struct FeedRepository {
    api: Arc<dyn ApiService>,
    config: FeatureConfig,
}

impl FeedRepository {
    pub fn new(api: Arc<dyn ApiService>, config: FeatureConfig) -> Self {
        Self { api, config }
    }

    /// Repository over a `FakeApiService` backed by a `FakeNetworkClient`
    pub fn with_defaults(config: FeatureConfig) -> Self {
        Self::new(Arc::new(FakeApiService::default()), config)
    }

    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }
}

impl SnapshotRepository for FeedRepository {
    fn load_snapshot(&self, user_id: i64) -> DomainResult<NetworkSnapshot> {
        let user = self.api.get_user(user_id)?;
        let posts = self.api.get_posts(user_id, self.config.page_size)?;
        let raw_hash = snapshot_checksum(&user, &posts);

        if self.config.enable_logging {
            log::debug!(
                "{}: snapshot user={} posts={} hash={}",
                self.config.name,
                user.id,
                posts.len(),
                raw_hash
            );
        }

        Ok(NetworkSnapshot {
            users: vec![user],
            posts,
            raw_hash,
        })
    }
}

/// Hash over user id, user name, then each post's id and title in order
pub fn snapshot_checksum(user: &ApiUserDto, posts: &[ApiPostDto]) -> i32 {
    let mut combiner = HashCombiner::new();
    combiner.update(&user.id).update(&user.name);
    for post in posts {
        combiner.update(&post.id).update(&post.title);
    }
    combiner.finish()
}
