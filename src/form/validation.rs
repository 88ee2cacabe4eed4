use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::domain::{User, UserField};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

/// Messages for the fields that are currently invalid, in field order.
/// A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: IndexMap<UserField, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: UserField) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: UserField, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (UserField, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_PATTERN.is_match(raw)
}

/// Required checks on every field plus the address pattern on `email`.
/// Blank means empty after trimming; the pattern runs on the raw value.
pub fn validate_user(user: &User) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in UserField::ALL {
        let value = user.field(field);
        if value.trim().is_empty() {
            errors.insert(field, format!("{} is required", field.label()));
        } else if field == UserField::Email && !is_valid_email(value) {
            errors.insert(field, "Invalid email format");
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_email(email: &str) -> User {
        User::new("A", "B", email, "Eng")
    }

    #[test]
    fn well_formed_user_passes() {
        assert!(validate_user(&user_with_email("a@b.co")).is_empty());
        assert!(validate_user(&user_with_email("first.last@mail.example.org")).is_empty());
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["ab.co", "a@bco", "a@b.", "@b.co", "a b@c.de", "a@@b.co", " a@b.co"] {
            let errors = validate_user(&user_with_email(email));
            assert_eq!(
                errors.get(UserField::Email),
                Some("Invalid email format"),
                "{email:?} should be rejected"
            );
        }
    }

    #[test]
    fn blank_email_reports_required_not_format() {
        let errors = validate_user(&user_with_email("   "));
        assert_eq!(errors.get(UserField::Email), Some("Email is required"));
    }

    #[test]
    fn blank_fields_are_reported_in_field_order() {
        let errors = validate_user(&User::default());
        let collected: Vec<_> = errors.iter().collect();
        assert_eq!(
            collected,
            vec![
                (UserField::FirstName, "First Name is required"),
                (UserField::LastName, "Last Name is required"),
                (UserField::Email, "Email is required"),
                (UserField::Department, "Department is required"),
            ]
        );
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let user = User::new("  ", "B", "a@b.co", "\t");
        let errors = validate_user(&user);
        assert_eq!(errors.len(), 2);
        assert!(errors.get(UserField::FirstName).is_some());
        assert!(errors.get(UserField::Department).is_some());
    }
}
