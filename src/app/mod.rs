mod controller;
mod input;
mod options;
mod pagination;
mod request;
mod runtime;
mod state;
mod status;
mod terminal;
mod user_desk;

pub use controller::{Controller, DELETE_ERROR, FETCH_ERROR, SAVE_ERROR};
pub use input::{Focus, KeyCommand, classify, classify_mouse};
pub use options::UiOptions;
pub use pagination::{
    DEFAULT_PAGE_SIZE, DEFAULT_SCROLL_THRESHOLD, ScrollMetrics, ScrollStep, ScrollSubscription,
    TableCursor,
};
pub use request::{Outcome, Request, SaveOp};
pub use state::AppState;
pub use user_desk::{DEFAULT_TITLE, UserDesk};
