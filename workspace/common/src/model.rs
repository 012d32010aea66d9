use serde::{Deserialize, Serialize};

/// A person record as returned by the random-data `users` endpoint.
///
/// The source payload carries many more fields (avatar, address, ...); they are
/// dropped on decode. `bank_id` never comes from the source and is only set
/// locally through the edit dialog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct User {
    pub id: i32,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Weak reference to [`Bank::id`]. Lookup only, no cascade.
    #[serde(default)]
    pub bank_id: Option<i32>,
}

/// A bank record as returned by the random-data `bank` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Bank {
    pub id: i32,
    #[serde(default)]
    pub bank_name: String,
    #[serde(default)]
    pub routing_number: String,
    #[serde(default)]
    pub swift_bic: String,
}

/// Single-field edit of a [`User`] draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserField {
    FirstName(String),
    LastName(String),
    Username(String),
    Email(String),
    BankId(Option<i32>),
}

/// Single-field edit of a [`Bank`] draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankField {
    BankName(String),
    RoutingNumber(String),
    SwiftBic(String),
}

/// Records addressable by id inside a collection.
pub trait Record: Clone {
    /// Field edit applicable to this record kind.
    type Field;

    fn id(&self) -> i32;

    /// Returns a copy with exactly one field replaced.
    fn with_field(&self, field: Self::Field) -> Self;
}

impl Record for User {
    type Field = UserField;

    fn id(&self) -> i32 {
        self.id
    }

    fn with_field(&self, field: UserField) -> Self {
        let mut next = self.clone();
        match field {
            UserField::FirstName(value) => next.first_name = value,
            UserField::LastName(value) => next.last_name = value,
            UserField::Username(value) => next.username = value,
            UserField::Email(value) => next.email = value,
            UserField::BankId(value) => next.bank_id = value,
        }
        next
    }
}

impl Record for Bank {
    type Field = BankField;

    fn id(&self) -> i32 {
        self.id
    }

    fn with_field(&self, field: BankField) -> Self {
        let mut next = self.clone();
        match field {
            BankField::BankName(value) => next.bank_name = value,
            BankField::RoutingNumber(value) => next.routing_number = value,
            BankField::SwiftBic(value) => next.swift_bic = value,
        }
        next
    }
}

/// Parses the value of the bank `<select>`: empty or "none" clears the reference.
pub fn parse_bank_selection(value: &str) -> Option<i32> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        None
    } else {
        value.parse::<i32>().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            bank_id: None,
        }
    }

    #[test]
    fn test_user_with_field_touches_one_field() {
        let user = sample_user();
        let edited = user.with_field(UserField::Email("new@example.com".to_string()));

        assert_eq!(edited.email, "new@example.com");
        assert_eq!(edited.first_name, user.first_name);
        assert_eq!(edited.last_name, user.last_name);
        assert_eq!(edited.username, user.username);
        assert_eq!(edited.bank_id, user.bank_id);
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn test_bank_with_field_accepts_empty_string() {
        let bank = Bank {
            id: 10,
            bank_name: "Acme".to_string(),
            routing_number: "123".to_string(),
            swift_bic: "ACMEUS33".to_string(),
        };
        let edited = bank.with_field(BankField::BankName(String::new()));

        assert_eq!(edited.bank_name, "");
        assert_eq!(edited.routing_number, "123");
        assert_eq!(edited.swift_bic, "ACMEUS33");
    }

    #[test]
    fn test_user_decode_ignores_unknown_fields() {
        let json = r#"{
            "id": 4121,
            "uid": "0a8d0c8a-5f1b-4d1e-9a64-6b1b43b4d0f1",
            "password": "secret",
            "first_name": "Lynn",
            "last_name": "Kuhn",
            "username": "lynn.kuhn",
            "email": "lynn.kuhn@email.com",
            "avatar": "https://robohash.org/x.png"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, 4121);
        assert_eq!(user.username, "lynn.kuhn");
        assert_eq!(user.bank_id, None);
    }

    #[test]
    fn test_parse_bank_selection() {
        assert_eq!(parse_bank_selection(""), None);
        assert_eq!(parse_bank_selection("none"), None);
        assert_eq!(parse_bank_selection("10"), Some(10));
        assert_eq!(parse_bank_selection("abc"), None);
    }
}
