//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! Only serde/serde_json are used here, for serialization and error conversion.

mod entity;
mod user;
mod feed;
mod snapshot;

pub use entity::{Entity, DomainError, DomainResult};
pub use user::{CoreUser, CoreModelFactory, UserSummary};
pub use feed::FeedItem;
pub use snapshot::{ApiPostDto, ApiUserDto, NetworkSnapshot};
