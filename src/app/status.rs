use crate::domain::User;

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Tab moves to the form, Esc returns to the table.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, user: &User) {
        self.message = format!("Editing user {}", user.id_label());
    }

    pub fn composing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn saving(&mut self) {
        self.message = "Saving...".to_string();
    }

    pub fn saved(&mut self) {
        self.message = "User saved".to_string();
    }

    pub fn deleting(&mut self, user_id: &str) {
        self.message = format!("Deleting user {user_id}...");
    }

    pub fn deleted(&mut self) {
        self.message = "User deleted".to_string();
    }

    pub fn issues_remaining(&mut self, count: usize) {
        self.message = format!("{count} issue(s) remaining");
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
