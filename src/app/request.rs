use crate::{
    domain::{User, UserId},
    remote::{RemoteResult, UserRemote},
};

/// How a submitted draft reaches the remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOp {
    Create,
    Update { id: UserId },
}

/// Remote work decided by the controller, to be run wherever the caller
/// runs async work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    FetchPage { page: u32, limit: u32 },
    Save { op: SaveOp, user: User },
    Delete { id: UserId },
}

/// A settled [`Request`], handed back to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Fetched {
        page: u32,
        result: RemoteResult<Vec<User>>,
    },
    Saved {
        op: SaveOp,
        user: User,
        result: RemoteResult<User>,
    },
    Deleted {
        id: UserId,
        result: RemoteResult<()>,
    },
}

impl Request {
    pub async fn execute(self, remote: &dyn UserRemote) -> Outcome {
        match self {
            Request::FetchPage { page, limit } => Outcome::Fetched {
                page,
                result: remote.list_page(page, limit).await,
            },
            Request::Save { op, user } => {
                let result = match &op {
                    SaveOp::Create => remote.create(&user).await,
                    SaveOp::Update { id } => remote.update(id, &user).await,
                };
                Outcome::Saved { op, user, result }
            }
            Request::Delete { id } => {
                let result = remote.delete(&id).await;
                Outcome::Deleted { id, result }
            }
        }
    }
}
