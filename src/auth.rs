//! Hard-coded single-credential login stub.
//!
//! The dashboard ships with exactly one demo account; there is no session
//! store and no hashing. Collaborators call [`authenticate`] and keep the
//! returned [`User`] themselves.

use serde::{Deserialize, Serialize};

const DEMO_EMAIL: &str = "admin@example.com";
const DEMO_PASSWORD: &str = "password123";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Viewer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Check a credential pair against the single demo account.
pub fn authenticate(email: &str, password: &str) -> Option<User> {
    if email == DEMO_EMAIL && password == DEMO_PASSWORD {
        Some(User {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: DEMO_EMAIL.to_string(),
            role: Role::Admin,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_credentials_accepted() {
        let user = authenticate("admin@example.com", "password123").unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.id, "1");
    }

    #[test]
    fn test_other_credentials_rejected() {
        assert!(authenticate("admin@example.com", "wrong").is_none());
        assert!(authenticate("someone@example.com", "password123").is_none());
        assert!(authenticate("", "").is_none());
    }
}
