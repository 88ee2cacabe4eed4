use crate::domain::{User, UserField};

use super::validation::{ValidationErrors, validate_user};

/// Working copy of the record under composition plus the messages from
/// the last validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    user: User,
    errors: ValidationErrors,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn value(&self, field: UserField) -> &str {
        self.user.field(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: UserField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Overwrite one field. Does not validate.
    pub fn set_field(&mut self, field: UserField, value: String) {
        self.user.set_field(field, value);
    }

    /// Replace the record wholesale. Messages from an earlier failed submit
    /// stay in place.
    pub fn load(&mut self, user: User) {
        self.user = user;
    }

    /// Recompute the messages and report whether the draft may be submitted.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_user(&self.user);
        self.errors.is_empty()
    }

    pub fn reset(&mut self) {
        self.user = User::default();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_keeps_previous_messages() {
        let mut draft = FormDraft::new();
        assert!(!draft.validate());
        draft.load(User::new("A", "B", "a@b.co", "Eng").with_id(3));
        assert_eq!(draft.errors().len(), 4);
        assert_eq!(draft.value(UserField::Email), "a@b.co");
    }

    #[test]
    fn reset_clears_record_and_messages() {
        let mut draft = FormDraft::new();
        draft.set_field(UserField::FirstName, "Ada".into());
        draft.validate();
        draft.reset();
        assert_eq!(draft, FormDraft::new());
    }
}
