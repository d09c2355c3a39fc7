//! Education screen: students, attendance and learning outcomes.

use std::sync::Arc;

use crate::application::forms::{FormError, OutcomeForm, StudentForm};
use crate::application::record_store::RecordStore;
use crate::application::session_manager::SessionManager;
use crate::domain::foundation::{Action, CenterId, RecordDate, RecordKind, StudentId};
use crate::domain::records::{
    Attendance, AttendanceStatus, LearningOutcome, NewAttendance, Student, StudentUpdate,
};

use super::{authorize, HandlerError};

/// Center assigned to students added by a user without one.
pub const DEFAULT_CENTER: &str = "center1";

pub struct EducationHandler {
    session: Arc<SessionManager>,
    store: Arc<RecordStore>,
}

impl EducationHandler {
    pub fn new(session: Arc<SessionManager>, store: Arc<RecordStore>) -> Self {
        Self { session, store }
    }

    /// Students matching `query` on name or grade.
    pub async fn students(&self, query: &str) -> Result<Vec<Student>, HandlerError> {
        authorize(&self.session, Action::View, RecordKind::Student).await?;
        Ok(self.store.search_students(query).await?)
    }

    /// Enrols a student at the user's own center, or the default one.
    pub async fn add_student(&self, form: StudentForm) -> Result<Student, HandlerError> {
        let user = authorize(&self.session, Action::Create, RecordKind::Student).await?;
        let center_id = match user.center_id {
            Some(center) => center,
            None => CenterId::new(DEFAULT_CENTER).map_err(FormError::from)?,
        };
        let draft = form.into_draft(center_id)?;
        Ok(self.store.add_student(draft).await?)
    }

    pub async fn update_student(
        &self,
        id: &StudentId,
        update: StudentUpdate,
    ) -> Result<Option<Student>, HandlerError> {
        authorize(&self.session, Action::Update, RecordKind::Student).await?;
        Ok(self.store.update_student(id, update).await?)
    }

    /// Marks attendance for today in the name of the signed-in teacher.
    pub async fn mark_attendance(
        &self,
        student_id: StudentId,
        status: AttendanceStatus,
        notes: Option<String>,
    ) -> Result<Attendance, HandlerError> {
        let user = authorize(&self.session, Action::Create, RecordKind::Attendance).await?;
        let draft = NewAttendance {
            student_id,
            teacher_id: user.id,
            date: RecordDate::today(),
            status,
            notes,
        };
        Ok(self.store.mark_attendance(draft).await?)
    }

    pub async fn add_learning_outcome(
        &self,
        form: OutcomeForm,
    ) -> Result<LearningOutcome, HandlerError> {
        let user =
            authorize(&self.session, Action::Create, RecordKind::LearningOutcome).await?;
        let draft = form.into_draft(user.id)?;
        Ok(self.store.add_learning_outcome(draft).await?)
    }
}
