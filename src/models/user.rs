use serde::{Deserialize, Serialize};

use super::deserialize_nullable_string;

/// Name shown for a learning result whose owner is not in the user list.
pub const UNKNOWN_USER_NAME: &str = "Không xác định";

/// A platform user as returned by `GET /api/v1/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Field of specialization.
    #[serde(default)]
    pub speci_field: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub englishlevel: Option<String>,
}

impl User {
    /// Stand-in for a user id that could not be resolved.
    pub fn placeholder(id: i64) -> Self {
        Self {
            id,
            email: String::new(),
            name: UNKNOWN_USER_NAME.to_string(),
            phone: None,
            speci_field: None,
            avatar: None,
            englishlevel: None,
        }
    }

    /// Whether this is a [`User::placeholder`] record.
    pub fn is_placeholder(&self) -> bool {
        self.name == UNKNOWN_USER_NAME && self.email.is_empty()
    }

    /// Label used by the user selector: `name (email)`.
    pub fn selector_label(&self) -> String {
        format!("{} ({})", self.name, self.email)
    }
}
