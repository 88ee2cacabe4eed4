use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use crate::domain::{User, UserId};

use super::{RemoteError, RemoteResult, UserRemote};

const DEPARTMENTS: [&str; 5] = ["Engineering", "Sales", "Support", "Finance", "Operations"];
const FIRST_NAMES: [&str; 8] = [
    "Ada", "Grace", "Linus", "Barbara", "Ken", "Margaret", "Dennis", "Frances",
];
const LAST_NAMES: [&str; 6] = ["Lovelace", "Hopper", "Torvalds", "Liskov", "Thompson", "Allen"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOp {
    ListPage,
    Create,
    Update,
    Delete,
}

/// One request as observed by [`InMemoryRemote`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    ListPage { page: u32, limit: u32 },
    Create,
    Update { id: UserId },
    Delete { id: UserId },
}

#[derive(Debug, Default)]
struct Store {
    users: Vec<User>,
    next_id: u64,
    scripted_failures: Vec<RemoteOp>,
    calls: Vec<RemoteCall>,
}

impl Store {
    fn record(&mut self, call: RemoteCall, op: RemoteOp) -> RemoteResult<()> {
        self.calls.push(call);
        if let Some(index) = self.scripted_failures.iter().position(|pending| *pending == op) {
            self.scripted_failures.remove(index);
            return Err(RemoteError::status(500));
        }
        Ok(())
    }

    fn position(&self, id: &UserId) -> Option<usize> {
        self.users
            .iter()
            .position(|user| user.id.as_ref() == Some(id))
    }
}

/// A collection held in process memory, paged the way json-server pages:
/// page `N` of size `M` is the slice starting at `(N - 1) * M`.
///
/// Backs the offline mode of the binary and the controller tests. Ids are
/// assigned as increasing numbers, continuing after the highest numeric id
/// already present.
#[derive(Debug, Default)]
pub struct InMemoryRemote {
    store: Mutex<Store>,
    latency: Option<Duration>,
}

impl InMemoryRemote {
    pub fn new(users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .filter_map(|user| match user.id {
                Some(UserId::Number(value)) => Some(value),
                _ => None,
            })
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            store: Mutex::new(Store {
                users,
                next_id,
                ..Store::default()
            }),
            latency: None,
        }
    }

    /// `count` generated users with ids `1..=count`.
    pub fn seeded(count: usize) -> Self {
        let users = (0..count).map(sample_user).collect();
        Self::new(users)
    }

    /// Delay every operation, which makes the loading state observable.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make the next call of `op` fail with HTTP 500.
    pub fn fail_next(&self, op: RemoteOp) {
        self.store.lock().scripted_failures.push(op);
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.store.lock().calls.clone()
    }

    pub fn users(&self) -> Vec<User> {
        self.store.lock().users.clone()
    }

    async fn pause(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

fn sample_user(index: usize) -> User {
    let first = FIRST_NAMES[index % FIRST_NAMES.len()];
    let last = LAST_NAMES[index % LAST_NAMES.len()];
    let department = DEPARTMENTS[index % DEPARTMENTS.len()];
    let id = index as u64 + 1;
    User::new(
        first,
        last,
        format!("{}.{}{id}@example.com", first.to_lowercase(), last.to_lowercase()),
        department,
    )
    .with_id(id)
}

#[async_trait]
impl UserRemote for InMemoryRemote {
    async fn list_page(&self, page: u32, limit: u32) -> RemoteResult<Vec<User>> {
        self.pause().await;
        let mut store = self.store.lock();
        store.record(RemoteCall::ListPage { page, limit }, RemoteOp::ListPage)?;
        let start = (page.max(1) as usize - 1).saturating_mul(limit as usize);
        let users: Vec<User> = store
            .users
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();
        debug!(page, limit, count = users.len(), "served page from memory");
        Ok(users)
    }

    async fn create(&self, user: &User) -> RemoteResult<User> {
        self.pause().await;
        let mut store = self.store.lock();
        store.record(RemoteCall::Create, RemoteOp::Create)?;
        let id = store.next_id;
        store.next_id += 1;
        let created = User {
            id: Some(UserId::Number(id)),
            ..user.clone()
        };
        store.users.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &UserId, user: &User) -> RemoteResult<User> {
        self.pause().await;
        let mut store = self.store.lock();
        store.record(RemoteCall::Update { id: id.clone() }, RemoteOp::Update)?;
        let index = store.position(id).ok_or_else(RemoteError::not_found)?;
        let updated = User {
            id: Some(id.clone()),
            ..user.clone()
        };
        store.users[index] = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: &UserId) -> RemoteResult<()> {
        self.pause().await;
        let mut store = self.store.lock();
        store.record(RemoteCall::Delete { id: id.clone() }, RemoteOp::Delete)?;
        let index = store.position(id).ok_or_else(RemoteError::not_found)?;
        store.users.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pages_are_sliced_by_limit() {
        let remote = InMemoryRemote::seeded(25);
        let first = remote.list_page(1, 10).await.unwrap();
        let third = remote.list_page(3, 10).await.unwrap();
        let fourth = remote.list_page(4, 10).await.unwrap();
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].id, Some(UserId::Number(1)));
        assert_eq!(third.len(), 5);
        assert_eq!(third[0].id, Some(UserId::Number(21)));
        assert!(fourth.is_empty());
    }

    #[tokio::test]
    async fn create_continues_after_highest_numeric_id() {
        let remote = InMemoryRemote::seeded(20);
        let created = remote
            .create(&User::new("A", "B", "a@b.co", "Eng"))
            .await
            .unwrap();
        assert_eq!(created.id, Some(UserId::Number(21)));
        assert_eq!(remote.users().len(), 21);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let remote = InMemoryRemote::seeded(3);
        let err = remote.delete(&UserId::from(99)).await.unwrap_err();
        assert_eq!(err, RemoteError::status(404));
        let err = remote
            .update(&UserId::from("nope"), &User::default())
            .await
            .unwrap_err();
        assert_eq!(err, RemoteError::status(404));
        assert_eq!(remote.users().len(), 3);
    }

    #[tokio::test]
    async fn scripted_failure_fires_once() {
        let remote = InMemoryRemote::seeded(3);
        remote.fail_next(RemoteOp::ListPage);
        assert!(remote.list_page(1, 10).await.is_err());
        assert_eq!(remote.list_page(1, 10).await.unwrap().len(), 3);
        assert_eq!(
            remote.calls(),
            vec![
                RemoteCall::ListPage { page: 1, limit: 10 },
                RemoteCall::ListPage { page: 1, limit: 10 },
            ]
        );
    }
}
