#![deny(rust_2018_idioms)]

pub mod app;
pub mod domain;
pub mod form;
pub mod presentation;
pub mod remote;

pub use app::{Controller, UiOptions, UserDesk};
pub use domain::{User, UserField, UserId};
#[cfg(feature = "http")]
pub use remote::HttpUserRemote;
pub use remote::{InMemoryRemote, RemoteError, UserRemote};

pub mod prelude {
    pub use super::app::{Outcome, Request, SaveOp, ScrollMetrics};
    pub use super::{Controller, InMemoryRemote, UiOptions, User, UserDesk, UserField, UserId};
    #[cfg(feature = "http")]
    pub use super::HttpUserRemote;
}
