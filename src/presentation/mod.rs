mod components;
mod view;

pub use components::{form_header, submit_label};
pub use view::{ScreenLayout, UiContext, draw, screen_layout, table_rows};
