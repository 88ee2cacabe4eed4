mod draft;
mod input;
mod validation;

pub use draft::FormDraft;
pub use input::{FormEvent, form_event, handle_text_edit};
pub use validation::{ValidationErrors, is_valid_email, validate_user};
