use std::fmt;

use serde::{Deserialize, Serialize};

use crate::routes::Route;

/// Portal role, selected via the login tabs before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    /// Tab index of this role (student = 0, teacher = 1).
    pub fn index(&self) -> usize {
        match self {
            Role::Student => 0,
            Role::Teacher => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Role::Student),
            1 => Some(Role::Teacher),
            _ => None,
        }
    }

    /// The other tab. With two roles next and previous are the same.
    pub fn toggle(&self) -> Self {
        match self {
            Role::Student => Role::Teacher,
            Role::Teacher => Role::Student,
        }
    }

    /// Get the display title for this role's tab.
    pub fn title(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
        }
    }

    /// Label of the identity field on this role's form.
    pub fn identity_label(&self) -> &'static str {
        match self {
            Role::Student => "Student ID",
            Role::Teacher => "Teacher ID",
        }
    }

    pub fn login_label(&self) -> &'static str {
        match self {
            Role::Student => "Login as Student",
            Role::Teacher => "Login as Teacher",
        }
    }

    /// Route the caller navigates to after a successful login.
    pub fn landing_route(&self) -> Route {
        match self {
            Role::Student => Route::Student,
            Role::Teacher => Route::Teacher,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_tab_indices() {
        assert_eq!(Role::Student.index(), 0);
        assert_eq!(Role::Teacher.index(), 1);
        assert_eq!(Role::from_index(0), Some(Role::Student));
        assert_eq!(Role::from_index(1), Some(Role::Teacher));
        assert_eq!(Role::from_index(2), None);
    }

    #[test]
    fn test_role_toggle() {
        assert_eq!(Role::Student.toggle(), Role::Teacher);
        assert_eq!(Role::Teacher.toggle(), Role::Student);
    }

    #[test]
    fn test_role_landing_route() {
        assert_eq!(Role::Student.landing_route().path(), "/student");
        assert_eq!(Role::Teacher.landing_route().path(), "/teacher");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");
        assert_eq!(serde_json::to_string(&Role::Teacher).unwrap(), "\"teacher\"");
        let parsed: Role = serde_json::from_str("\"teacher\"").unwrap();
        assert_eq!(parsed, Role::Teacher);
    }
}
