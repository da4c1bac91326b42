//! Network Client
//!
//! Request/response types and the client trait used for raw calls such as ping.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::DomainResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRequest {
    pub path: String,
    pub method: String,
    pub body: Option<String>,
}

impl NetworkRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: "GET".to_string(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: String) -> Self {
        Self {
            path: path.into(),
            method: "POST".to_string(),
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkResponse {
    pub code: u16,
    pub body: Option<String>,
}

impl NetworkResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }
}

/// Executes network requests synchronously
pub trait NetworkClient: Send + Sync {
    fn execute(&self, request: NetworkRequest) -> DomainResult<NetworkResponse>;
}

/// In-memory client. Every path answers 200 unless a route override exists.
#[derive(Debug, Clone, Default)]
pub struct FakeNetworkClient {
    routes: HashMap<String, u16>,
}

impl FakeNetworkClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with `code` instead of 200
    pub fn with_route(mut self, path: impl Into<String>, code: u16) -> Self {
        self.routes.insert(path.into(), code);
        self
    }
}

impl NetworkClient for FakeNetworkClient {
    fn execute(&self, request: NetworkRequest) -> DomainResult<NetworkResponse> {
        let code = self.routes.get(&request.path).copied().unwrap_or(200);
        Ok(NetworkResponse {
            code,
            body: Some(format!("{} {}", request.method, request.path)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_route_is_ok() {
        let client = FakeNetworkClient::new();
        let response = client.execute(NetworkRequest::get("/health")).unwrap();
        assert_eq!(response.code, 200);
        assert!(response.is_success());
        assert_eq!(response.body.as_deref(), Some("GET /health"));
    }

    #[test]
    fn test_route_override() {
        let client = FakeNetworkClient::new().with_route("/missing", 404);
        let response = client.execute(NetworkRequest::get("/missing")).unwrap();
        assert_eq!(response.code, 404);
        assert!(!response.is_success());

        let response = client.execute(NetworkRequest::post("/other", "{}".to_string())).unwrap();
        assert_eq!(response.code, 200);
        assert_eq!(response.body.as_deref(), Some("POST /other"));
    }
}
