//! Feature Feed Core
//!
//! Layered architecture:
//! - domain: Core entities, errors and the user factory
//! - network: Network/API collaborator traits and their fake implementations
//! - repository: Snapshot loading, hashing and feed item mapping
//! - config: Per-feature configuration

pub mod config;
pub mod domain;
pub mod network;
pub mod repository;

pub use config::FeatureConfig;
pub use domain::{DomainError, DomainResult, Entity};
