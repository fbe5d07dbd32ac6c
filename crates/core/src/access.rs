//! Category access rules.
//!
//! A category's owner always has permission on it. Anyone else has
//! permission only through an `APPROVED` permission request for that
//! category. The storage layer evaluates the same predicate in SQL when it
//! gates a write; [`has_permission`] is the in-process form used when
//! projecting rows that were already read.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Maximum category name length (matches `categories.name VARCHAR(100)`).
pub const MAX_CATEGORY_NAME_LEN: usize = 100;

/// Maximum difficulty label length (matches `questions.difficulty VARCHAR(20)`).
pub const MAX_DIFFICULTY_LEN: usize = 20;

pub const STATUS_PENDING: &str = "PENDING";
pub const STATUS_APPROVED: &str = "APPROVED";
pub const STATUS_REJECTED: &str = "REJECTED";

// ---------------------------------------------------------------------------
// Permission request status
// ---------------------------------------------------------------------------

/// Lifecycle state of a permission request.
///
/// Requests start `Pending` and move to `Approved` or `Rejected` when the
/// category owner responds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PermissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl PermissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PermissionStatus::Pending => STATUS_PENDING,
            PermissionStatus::Approved => STATUS_APPROVED,
            PermissionStatus::Rejected => STATUS_REJECTED,
        }
    }

    pub fn grants_access(self) -> bool {
        matches!(self, PermissionStatus::Approved)
    }
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(PermissionStatus::Pending),
            STATUS_APPROVED => Ok(PermissionStatus::Approved),
            STATUS_REJECTED => Ok(PermissionStatus::Rejected),
            other => Err(format!("Unknown permission status '{other}'")),
        }
    }
}

// ---------------------------------------------------------------------------
// Owner decision
// ---------------------------------------------------------------------------

/// An owner's answer to a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    /// The status a request takes on after this decision.
    pub fn resulting_status(self) -> PermissionStatus {
        match self {
            Decision::Approve => PermissionStatus::Approved,
            Decision::Reject => PermissionStatus::Rejected,
        }
    }
}

impl FromStr for Decision {
    type Err = String;

    /// Parses the wire value (`"APPROVED"` or `"REJECTED"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_APPROVED => Ok(Decision::Approve),
            STATUS_REJECTED => Ok(Decision::Reject),
            other => Err(format!(
                "Invalid status '{other}'. Must be one of: {STATUS_APPROVED}, {STATUS_REJECTED}"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Predicate and input checks
// ---------------------------------------------------------------------------

/// Whether `requester_id` may add or edit questions in a category.
///
/// `request_status` is the requester's own permission request for the
/// category, if one exists.
pub fn has_permission(
    owner_id: DbId,
    requester_id: DbId,
    request_status: Option<PermissionStatus>,
) -> bool {
    owner_id == requester_id || request_status.is_some_and(PermissionStatus::grants_access)
}

/// Validate a category name before insert.
pub fn validate_category_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Category name is required".to_string());
    }
    if trimmed.chars().count() > MAX_CATEGORY_NAME_LEN {
        return Err(format!(
            "Category name must be at most {MAX_CATEGORY_NAME_LEN} characters long"
        ));
    }
    Ok(())
}

/// Validate the user-supplied fields of a question.
pub fn validate_question(question: &str, difficulty: Option<&str>) -> Result<(), String> {
    if question.trim().is_empty() {
        return Err("Question text is required".to_string());
    }
    if let Some(d) = difficulty {
        if d.chars().count() > MAX_DIFFICULTY_LEN {
            return Err(format!(
                "Difficulty must be at most {MAX_DIFFICULTY_LEN} characters long"
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_owner_always_has_permission() {
        assert!(has_permission(1, 1, None));
        assert!(has_permission(1, 1, Some(PermissionStatus::Rejected)));
        assert!(has_permission(1, 1, Some(PermissionStatus::Pending)));
    }

    #[test]
    fn test_non_owner_needs_approved_request() {
        assert!(!has_permission(1, 2, None));
        assert!(!has_permission(1, 2, Some(PermissionStatus::Pending)));
        assert!(!has_permission(1, 2, Some(PermissionStatus::Rejected)));
        assert!(has_permission(1, 2, Some(PermissionStatus::Approved)));
    }

    #[test]
    fn test_decision_parses_wire_values() {
        assert_matches!("APPROVED".parse::<Decision>(), Ok(Decision::Approve));
        assert_matches!("REJECTED".parse::<Decision>(), Ok(Decision::Reject));
    }

    #[test]
    fn test_decision_rejects_pending_and_garbage() {
        let err = "PENDING".parse::<Decision>().unwrap_err();
        assert!(err.contains("Invalid status"));
        assert!("approved".parse::<Decision>().is_err());
    }

    #[test]
    fn test_decision_resulting_status() {
        assert_eq!(
            Decision::Approve.resulting_status(),
            PermissionStatus::Approved
        );
        assert_eq!(
            Decision::Reject.resulting_status(),
            PermissionStatus::Rejected
        );
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            PermissionStatus::Pending,
            PermissionStatus::Approved,
            PermissionStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<PermissionStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_category_name_rules() {
        assert!(validate_category_name("Arrays").is_ok());
        assert!(validate_category_name("   ").is_err());
        assert!(validate_category_name(&"x".repeat(MAX_CATEGORY_NAME_LEN)).is_ok());
        assert!(validate_category_name(&"x".repeat(MAX_CATEGORY_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_question_rules() {
        assert!(validate_question("What is a heap?", Some("Easy")).is_ok());
        assert!(validate_question("What is a heap?", None).is_ok());
        assert!(validate_question("", Some("Easy")).is_err());
        let long = "x".repeat(MAX_DIFFICULTY_LEN + 1);
        assert!(validate_question("Q", Some(&long)).is_err());
    }
}
