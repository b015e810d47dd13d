//! API account entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role granted to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    User,
    Administrator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Administrator => "Administrator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "User" => Ok(Role::User),
            "Administrator" => Ok(Role::Administrator),
            other => Err(format!("Unknown role '{other}'")),
        }
    }
}

/// A registered account. The email doubles as the login name.
#[derive(Debug, Clone)]
pub struct ApiUser {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub roles: Vec<Role>,
    pub created_at: DateTime<Utc>,
}

impl ApiUser {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Input data for registering an account. `password_hash` is already hashed.
#[derive(Debug, Clone)]
pub struct NewApiUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub roles: Vec<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        assert_eq!("Administrator".parse::<Role>(), Ok(Role::Administrator));
        assert_eq!(Role::User.to_string(), "User");
        assert!("Root".parse::<Role>().is_err());
    }

    #[test]
    fn test_has_role() {
        let user = ApiUser {
            id: 1,
            email: "admin@example.com".to_string(),
            password_hash: String::new(),
            first_name: "Ada".to_string(),
            last_name: "Admin".to_string(),
            phone_number: None,
            roles: vec![Role::User, Role::Administrator],
            created_at: Utc::now(),
        };

        assert!(user.has_role(Role::Administrator));
        assert!(user.has_role(Role::User));
    }
}
