//! Domain records - the persisted business entities.
//!
//! Each record comes with a `New*` draft (the record without its id) that
//! validates itself before the store stamps an id onto it. Records are plain
//! data serialized in camelCase so documents written by the mobile client and
//! by this crate share one shape.

mod attendance;
mod center;
mod learning_outcome;
mod opd_event;
mod patient;
mod scholar;
mod student;
mod user;
mod validate;

pub use attendance::{Attendance, AttendanceStatus, NewAttendance};
pub use center::{Center, CenterType, NewCenter};
pub use learning_outcome::{LearningOutcome, NewLearningOutcome, DEFAULT_MAX_MARKS};
pub use opd_event::{NewOpdEvent, OpdEvent};
pub use patient::{Gender, NewPatient, Patient};
pub use scholar::{NewScholar, Scholar, ScholarStatus};
pub use student::{NewStudent, Student, StudentUpdate};
pub use user::{normalize_email, validate_email, SignupData, User};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named collections in the document store, one per record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    Users,
    /// Password digests, keyed by user id. Not a record type.
    Credentials,
    Students,
    Attendance,
    LearningOutcomes,
    Patients,
    OpdEvents,
    Scholars,
    Centers,
}

impl Collection {
    /// Collection name used by document backends.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Credentials => "credentials",
            Collection::Students => "students",
            Collection::Attendance => "attendance",
            Collection::LearningOutcomes => "learningOutcomes",
            Collection::Patients => "patients",
            Collection::OpdEvents => "opdWheels",
            Collection::Scholars => "scholars",
            Collection::Centers => "centers",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A record that lives in exactly one collection under a string key.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The collection this record type is stored in.
    const COLLECTION: Collection;

    /// The document key of this record.
    fn record_id(&self) -> &str;
}
