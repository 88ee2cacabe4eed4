use std::fmt;

use serde::{Deserialize, Serialize};

/// Remote-assigned identifier. Collections in the wild hand out both
/// numeric and textual ids, so both are accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(u64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(value) => write!(f, "{value}"),
            UserId::Text(value) => f.write_str(value),
        }
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        UserId::Number(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId::Text(value.to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        UserId::Text(value)
    }
}

/// One record of the remote collection.
///
/// `id` is `None` for a record that has not been saved yet; it is left out
/// of the serialized body in that case so the remote can assign one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
}

impl User {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            department: department.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<UserId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.first_name,
            UserField::LastName => &self.last_name,
            UserField::Email => &self.email,
            UserField::Department => &self.department,
        }
    }

    pub fn set_field(&mut self, field: UserField, value: String) {
        let slot = match field {
            UserField::FirstName => &mut self.first_name,
            UserField::LastName => &mut self.last_name,
            UserField::Email => &mut self.email,
            UserField::Department => &mut self.department,
        };
        *slot = value;
    }

    pub fn id_label(&self) -> String {
        self.id.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

/// The editable text attributes of a [`User`], in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UserField {
    FirstName,
    LastName,
    Email,
    Department,
}

impl UserField {
    pub const ALL: [UserField; 4] = [
        UserField::FirstName,
        UserField::LastName,
        UserField::Email,
        UserField::Department,
    ];

    /// Wire name of the attribute.
    pub fn key(self) -> &'static str {
        match self {
            UserField::FirstName => "firstName",
            UserField::LastName => "lastName",
            UserField::Email => "email",
            UserField::Department => "department",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserField::FirstName => "First Name",
            UserField::LastName => "Last Name",
            UserField::Email => "Email",
            UserField::Department => "Department",
        }
    }

    pub fn next(self) -> Self {
        match self {
            UserField::FirstName => UserField::LastName,
            UserField::LastName => UserField::Email,
            UserField::Email => UserField::Department,
            UserField::Department => UserField::FirstName,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            UserField::FirstName => UserField::Department,
            UserField::LastName => UserField::FirstName,
            UserField::Email => UserField::LastName,
            UserField::Department => UserField::Email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unsaved_user_serializes_without_id() {
        let user = User::new("A", "B", "a@b.co", "Eng");
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({
                "firstName": "A",
                "lastName": "B",
                "email": "a@b.co",
                "department": "Eng"
            })
        );
    }

    #[test]
    fn accepts_numeric_and_textual_ids() {
        let numeric: User = serde_json::from_value(json!({"id": 7, "firstName": "x"})).unwrap();
        let textual: User = serde_json::from_value(json!({"id": "21"})).unwrap();
        assert_eq!(numeric.id, Some(UserId::Number(7)));
        assert_eq!(numeric.last_name, "");
        assert_eq!(textual.id, Some(UserId::from("21")));
        assert_eq!(textual.id_label(), "21");
    }

    #[test]
    fn null_id_reads_as_unsaved() {
        let user: User = serde_json::from_value(json!({"id": null, "email": "e"})).unwrap();
        assert!(user.id.is_none());
    }

    #[test]
    fn set_field_touches_only_the_named_field() {
        let mut user = User::new("A", "B", "a@b.co", "Eng");
        user.set_field(UserField::Department, "Sales".into());
        assert_eq!(user.department, "Sales");
        assert_eq!(user.field(UserField::FirstName), "A");
        assert_eq!(user.field(UserField::Email), "a@b.co");
    }

    #[test]
    fn field_cycle_wraps() {
        assert_eq!(UserField::Department.next(), UserField::FirstName);
        assert_eq!(UserField::FirstName.prev(), UserField::Department);
    }
}
