//! Network Layer
//!
//! Collaborator abstractions the feature pipeline talks to.
//! The fake implementations answer deterministically without any I/O.

mod client;
mod api;

pub use client::{FakeNetworkClient, NetworkClient, NetworkRequest, NetworkResponse};
pub use api::{ApiService, FakeApiService};
