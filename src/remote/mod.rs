//! Access to the remote user collection.
//!
//! Every operation is exactly one round trip. Nothing here retries, caches
//! or authenticates; callers decide what a failure means for them.

mod error;
#[cfg(feature = "http")]
mod http;
mod memory;

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::{User, UserId};

pub use error::{RemoteError, RemoteResult};
#[cfg(feature = "http")]
pub use http::{DEFAULT_ENDPOINT, HttpUserRemote};
pub use memory::{InMemoryRemote, RemoteCall, RemoteOp};

/// The four operations the collection endpoint supports.
#[async_trait]
pub trait UserRemote: Send + Sync + Debug {
    /// Fetch one page of users. Ordering is whatever the remote returns.
    async fn list_page(&self, page: u32, limit: u32) -> RemoteResult<Vec<User>>;

    /// Create a user; the returned record carries the remote-assigned id.
    async fn create(&self, user: &User) -> RemoteResult<User>;

    /// Replace the user stored under `id`. No concurrency check: last writer wins.
    async fn update(&self, id: &UserId, user: &User) -> RemoteResult<User>;

    async fn delete(&self, id: &UserId) -> RemoteResult<()>;
}
