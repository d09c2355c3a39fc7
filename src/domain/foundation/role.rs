//! Staff roles and the functional areas they unlock.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a staff account.
///
/// Documents written by other clients may carry a role this build does not
/// know; those deserialize to `Unrecognized` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access to every area.
    Admin,
    /// Runs an education center: students, attendance, learning outcomes.
    Teacher,
    /// Runs OPD camps: patients and clinic events.
    Doctor,
    #[serde(other)]
    Unrecognized,
}

impl Role {
    /// Parses a role name case-insensitively.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "teacher" => Role::Teacher,
            "doctor" => Role::Doctor,
            _ => Role::Unrecognized,
        }
    }

    /// Returns true for the three roles this build knows.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Role::Unrecognized)
    }

    /// Returns the wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Doctor => "doctor",
            Role::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Top-level navigation entry points of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionalArea {
    Dashboard,
    Education,
    Medical,
    Scholarships,
    Upload,
    Profile,
}

impl FunctionalArea {
    /// All areas in navigation order.
    pub const ALL: [FunctionalArea; 6] = [
        FunctionalArea::Dashboard,
        FunctionalArea::Education,
        FunctionalArea::Medical,
        FunctionalArea::Scholarships,
        FunctionalArea::Upload,
        FunctionalArea::Profile,
    ];
}

impl fmt::Display for FunctionalArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FunctionalArea::Dashboard => "dashboard",
            FunctionalArea::Education => "education",
            FunctionalArea::Medical => "medical",
            FunctionalArea::Scholarships => "scholarships",
            FunctionalArea::Upload => "upload",
            FunctionalArea::Profile => "profile",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Role::parse("Admin"), Role::Admin);
        assert_eq!(Role::parse(" TEACHER "), Role::Teacher);
        assert_eq!(Role::parse("doctor"), Role::Doctor);
    }

    #[test]
    fn parse_maps_unknown_names_to_unrecognized() {
        assert_eq!(Role::parse("volunteer"), Role::Unrecognized);
        assert!(!Role::parse("").is_recognized());
    }

    #[test]
    fn serializes_to_lowercase_json() {
        assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), "\"doctor\"");
    }

    #[test]
    fn deserializes_unknown_role_as_unrecognized() {
        let role: Role = serde_json::from_str("\"volunteer\"").unwrap();
        assert_eq!(role, Role::Unrecognized);
    }

    #[test]
    fn functional_area_display_matches_wire_name() {
        for area in FunctionalArea::ALL {
            let json = serde_json::to_string(&area).unwrap();
            assert_eq!(json, format!("\"{}\"", area));
        }
    }
}
