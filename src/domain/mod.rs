mod user;

pub use user::{User, UserField, UserId};
