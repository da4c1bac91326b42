//! Repository Layer
//!
//! Snapshot loading and the domain mapping applied to fetched users.

mod traits;
mod checksum;
mod mapping;
mod feed_repo;


pub use traits::SnapshotRepository;
pub use checksum::{compute_checksum, HashCombiner, JavaHash};
pub use mapping::{to_feed_items, to_user_summary};
pub use feed_repo::{snapshot_checksum, FeedRepository};
