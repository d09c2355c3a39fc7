//! Attendance marks. Append-only; several marks per student per day are allowed.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Collection, Record};
use crate::domain::foundation::{AttendanceId, RecordDate, StudentId, UserId, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
        };
        write!(f, "{}", s)
    }
}

/// One attendance mark made by a teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: AttendanceId,
    pub student_id: StudentId,
    pub teacher_id: UserId,
    pub date: RecordDate,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Record for Attendance {
    const COLLECTION: Collection = Collection::Attendance;

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttendance {
    pub student_id: StudentId,
    pub teacher_id: UserId,
    pub date: RecordDate,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
}

impl NewAttendance {
    /// Ids are checked on construction; the only rule left is that a
    /// mark cannot be dated in the future.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.date > RecordDate::today() {
            return Err(ValidationError::invalid_format(
                "date",
                "attendance cannot be marked for a future date",
            ));
        }
        Ok(())
    }

    pub fn into_record(self, id: AttendanceId) -> Attendance {
        Attendance {
            id,
            student_id: self.student_id,
            teacher_id: self.teacher_id,
            date: self.date,
            status: self.status,
            notes: self.notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_notes_are_dropped() {
        let record = NewAttendance {
            student_id: StudentId::new("1").unwrap(),
            teacher_id: UserId::new("t-1").unwrap(),
            date: RecordDate::from_ymd(2024, 5, 2).unwrap(),
            status: AttendanceStatus::Late,
            notes: Some("  ".to_string()),
        }
        .into_record(AttendanceId::new("a-1").unwrap());

        assert!(record.notes.is_none());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], "late");
        assert_eq!(json["studentId"], "1");
    }
}
