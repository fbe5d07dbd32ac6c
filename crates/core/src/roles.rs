//! Well-known role names.
//!
//! These must match the `CHECK` constraint on `users.role` in
//! `20250101000001_create_users.sql`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_USER: &str = "USER";

/// All accepted role names.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_USER];

/// A user's role, fixed at signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// May browse the user directory.
    Admin,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::User => ROLE_USER,
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
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
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_USER => Ok(Role::User),
            other => Err(format!(
                "Unknown role '{other}'. Must be one of: {}",
                VALID_ROLES.join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("USER".parse::<Role>().unwrap(), Role::User);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_round_trips_through_display() {
        for role in [Role::Admin, Role::User] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_serde_uses_uppercase_names() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        let parsed: Role = serde_json::from_str("\"USER\"").unwrap();
        assert_eq!(parsed, Role::User);
    }
}
