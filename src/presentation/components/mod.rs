mod footer;
mod form;
mod table;

pub use footer::render_footer;
pub use form::{FORM_HEIGHT, form_header, render_form, submit_label};
pub use table::render_table;
