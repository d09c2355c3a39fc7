use serde::{Deserialize, Serialize};

use super::validate::required;
use super::{Collection, Record};
use crate::domain::foundation::{LearningOutcomeId, RecordDate, StudentId, UserId, ValidationError};

/// Maximum marks assumed when an exam does not state its own.
pub const DEFAULT_MAX_MARKS: u32 = 100;

/// An exam or test result recorded by a teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningOutcome {
    pub id: LearningOutcomeId,
    pub student_id: StudentId,
    pub teacher_id: UserId,
    pub subject: String,
    pub marks: u32,
    pub max_marks: u32,
    pub exam_type: String,
    pub date: RecordDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
}

impl LearningOutcome {
    /// Score as a percentage of the maximum, rounded down.
    pub fn percentage(&self) -> u32 {
        if self.max_marks == 0 {
            return 0;
        }
        (u64::from(self.marks) * 100 / u64::from(self.max_marks)) as u32
    }
}

impl Record for LearningOutcome {
    const COLLECTION: Collection = Collection::LearningOutcomes;

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLearningOutcome {
    pub student_id: StudentId,
    pub teacher_id: UserId,
    pub subject: String,
    pub marks: u32,
    pub max_marks: u32,
    pub exam_type: String,
    pub date: RecordDate,
    pub certificate: Option<String>,
}

impl NewLearningOutcome {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("subject", &self.subject)?;
        if self.max_marks == 0 {
            return Err(ValidationError::out_of_range(
                "maxMarks",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        if self.marks > self.max_marks {
            return Err(ValidationError::out_of_range(
                "marks",
                0,
                i64::from(self.max_marks),
                i64::from(self.marks),
            ));
        }
        Ok(())
    }

    pub fn into_record(self, id: LearningOutcomeId) -> LearningOutcome {
        LearningOutcome {
            id,
            student_id: self.student_id,
            teacher_id: self.teacher_id,
            subject: self.subject,
            marks: self.marks,
            max_marks: self.max_marks,
            exam_type: self.exam_type,
            date: self.date,
            certificate: self.certificate,
        }
    }
}
