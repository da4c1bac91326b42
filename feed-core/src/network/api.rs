//! API Service
//!
//! Typed user/post endpoints layered over a `NetworkClient`.

use std::sync::Arc;

use crate::domain::{ApiPostDto, ApiUserDto, DomainError, DomainResult};
use super::client::{FakeNetworkClient, NetworkClient, NetworkRequest};

/// User and post endpoints consumed by the repository
pub trait ApiService: Send + Sync {
    fn get_user(&self, id: i64) -> DomainResult<ApiUserDto>;

    fn get_posts(&self, user_id: i64, page_size: usize) -> DomainResult<Vec<ApiPostDto>>;
}

/// Synthesizes users and posts after checking the route answers with 2xx.
/// A 404 becomes `NotFound`, any other failure status `Network`.
pub struct FakeApiService {
    client: Arc<dyn NetworkClient>,
}

impl FakeApiService {
    pub fn new(client: Arc<dyn NetworkClient>) -> Self {
        Self { client }
    }

    fn expect_success(&self, path: String) -> DomainResult<()> {
        let response = self.client.execute(NetworkRequest::get(path.clone()))?;
        match response.code {
            _ if response.is_success() => Ok(()),
            404 => Err(DomainError::NotFound(path)),
            code => Err(DomainError::Network { path, code }),
        }
    }
}

impl Default for FakeApiService {
    fn default() -> Self {
        Self::new(Arc::new(FakeNetworkClient::new()))
    }
}

impl ApiService for FakeApiService {
    fn get_user(&self, id: i64) -> DomainResult<ApiUserDto> {
        self.expect_success(format!("/users/{}", id))?;
        Ok(ApiUserDto {
            id,
            name: format!("User {}", id),
            email: Some(format!("user{}@example.com", id)),
            is_active: id % 2 == 0,
        })
    }

    fn get_posts(&self, user_id: i64, page_size: usize) -> DomainResult<Vec<ApiPostDto>> {
        self.expect_success(format!("/users/{}/posts?limit={}", user_id, page_size))?;
        let posts = (0..page_size)
            .map(|i| ApiPostDto {
                id: user_id.wrapping_mul(1000).wrapping_add(i as i64),
                user_id,
                title: format!("Post {}", i),
                body: format!("Body of post {}", i),
            })
            .collect();
        Ok(posts)
    }
}
