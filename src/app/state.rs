use crate::{
    domain::User,
    form::{FormDraft, ValidationErrors},
};

/// Everything the interface shows. Owned by the controller; readers get
/// shared references.
#[derive(Debug, Clone)]
pub struct AppState {
    pub(crate) users: Vec<User>,
    pub(crate) form: FormDraft,
    pub(crate) editing: bool,
    pub(crate) error: Option<String>,
    pub(crate) page: u32,
    pub(crate) loading: bool,
    pub(crate) started: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            form: FormDraft::new(),
            editing: false,
            error: None,
            page: 1,
            loading: false,
            started: false,
        }
    }
}

impl AppState {
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn form(&self) -> &FormDraft {
        &self.form
    }

    pub fn validation(&self) -> &ValidationErrors {
        self.form.errors()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Most recent remote failure. Later successes leave it in place.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
