//! Strongly-typed identifier value objects.
//!
//! Every record is keyed by an opaque string. Reference data uses short
//! human-readable keys (`"center1"`), generated ids are UUID v4 strings, so
//! both shapes must round-trip through the same type.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

/// Declares a string-backed identifier newtype.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an id from an existing key, returning error if blank.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Generates a fresh process-unique id.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().simple().to_string())
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a staff account (admin, teacher or doctor).
    UserId,
    "user_id"
);
string_id!(
    /// Identifier of an enrolled student.
    StudentId,
    "student_id"
);
string_id!(
    /// Identifier of a single attendance mark.
    AttendanceId,
    "attendance_id"
);
string_id!(
    /// Identifier of a recorded exam result.
    LearningOutcomeId,
    "learning_outcome_id"
);
string_id!(
    /// Identifier of a patient visit record.
    PatientId,
    "patient_id"
);
string_id!(
    /// Identifier of an OPD-on-wheels clinic event.
    OpdEventId,
    "opd_event_id"
);
string_id!(
    /// Identifier of a scholarship recipient.
    ScholarId,
    "scholar_id"
);
string_id!(
    /// Identifier of an education or OPD center.
    CenterId,
    "center_id"
);
