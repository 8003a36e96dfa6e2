//! Team roster types

use serde::{Deserialize, Serialize};

/// Team information returned by `GET /teams`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Team {
    /// First member whose email matches case-insensitively.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email_matches(email))
    }
}

/// A team member.
///
/// User ids are opaque strings (e.g. `U123456789`) and are never numeric
/// ids in disguise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub realname: String,
    #[serde(default)]
    pub profile_img: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}

impl User {
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.as_deref().is_some_and(|own| own.to_lowercase() == email.to_lowercase())
    }
}
