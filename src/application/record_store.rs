//! RecordStore - the authoritative owner of every domain record collection.
//!
//! Every mutation validates its input first and writes nothing on rejection.
//! Reads go straight to the document store, so the dashboard projection and
//! every list reflect the latest completed write.

use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::dashboard::{CollectionCounts, DashboardBaseline, DashboardStats};
use crate::domain::foundation::{
    AttendanceId, CenterId, LearningOutcomeId, OpdEventId, PatientId, RecordDate, ScholarId,
    StudentId, ValidationError,
};
use crate::domain::records::{
    Attendance, Center, CenterType, Collection, LearningOutcome, NewAttendance, NewCenter,
    NewLearningOutcome, NewOpdEvent, NewPatient, NewScholar, NewStudent, OpdEvent, Patient,
    Record, Scholar, ScholarStatus, Student, StudentUpdate,
};
use crate::ports::{DocumentStore, DocumentStoreError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Document store error: {0}")]
    Document(#[from] DocumentStoreError),

    #[error("Malformed document in {collection}: {message}")]
    Corrupt {
        collection: Collection,
        message: String,
    },
}

impl StoreError {
    fn corrupt(collection: Collection, e: serde_json::Error) -> Self {
        StoreError::Corrupt {
            collection,
            message: e.to_string(),
        }
    }
}

pub struct RecordStore {
    documents: Arc<dyn DocumentStore>,
    baseline: DashboardBaseline,
}

impl RecordStore {
    pub fn new(documents: Arc<dyn DocumentStore>) -> Self {
        Self {
            documents,
            baseline: DashboardBaseline::default(),
        }
    }

    pub fn with_baseline(mut self, baseline: DashboardBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    // === Generic access ===

    async fn append<R: Record>(&self, record: R) -> Result<R, StoreError> {
        let document =
            serde_json::to_value(&record).map_err(|e| StoreError::corrupt(R::COLLECTION, e))?;
        self.documents
            .append(R::COLLECTION, record.record_id(), document)
            .await?;
        tracing::debug!(collection = %R::COLLECTION, id = record.record_id(), "Record added");
        Ok(record)
    }

    async fn put<R: Record>(&self, record: &R) -> Result<(), StoreError> {
        let document =
            serde_json::to_value(record).map_err(|e| StoreError::corrupt(R::COLLECTION, e))?;
        self.documents
            .set(R::COLLECTION, record.record_id(), document)
            .await?;
        Ok(())
    }

    async fn load<R: Record>(&self, id: &str) -> Result<Option<R>, StoreError> {
        self.documents
            .get(R::COLLECTION, id)
            .await?
            .map(|doc| serde_json::from_value(doc).map_err(|e| StoreError::corrupt(R::COLLECTION, e)))
            .transpose()
    }

    async fn load_all<R: Record>(&self) -> Result<Vec<R>, StoreError> {
        self.documents
            .list(R::COLLECTION)
            .await?
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(|e| StoreError::corrupt(R::COLLECTION, e)))
            .collect()
    }

    async fn count(&self, collection: Collection) -> Result<usize, StoreError> {
        Ok(self.documents.list(collection).await?.len())
    }

    // === Education ===

    pub async fn add_student(&self, draft: NewStudent) -> Result<Student, StoreError> {
        draft.validate()?;
        let student = self.append(draft.into_record(StudentId::generate())).await?;
        tracing::info!(student_id = %student.id, center_id = %student.center_id, "Student added");
        Ok(student)
    }

    /// Merges `update` into the student. `Ok(None)` if no such student exists.
    pub async fn update_student(
        &self,
        id: &StudentId,
        update: StudentUpdate,
    ) -> Result<Option<Student>, StoreError> {
        update.validate()?;
        let Some(mut student) = self.load::<Student>(id.as_str()).await? else {
            tracing::debug!(student_id = %id, "Update ignored: no such student");
            return Ok(None);
        };
        student.apply(update);
        self.put(&student).await?;
        tracing::info!(student_id = %id, "Student updated");
        Ok(Some(student))
    }

    pub async fn students(&self) -> Result<Vec<Student>, StoreError> {
        self.load_all().await
    }

    pub async fn student(&self, id: &StudentId) -> Result<Option<Student>, StoreError> {
        self.load(id.as_str()).await
    }

    /// Case-insensitive search on name or grade. An empty query matches all.
    pub async fn search_students(&self, query: &str) -> Result<Vec<Student>, StoreError> {
        let query = query.trim();
        Ok(self
            .students()
            .await?
            .into_iter()
            .filter(|s| s.matches(query))
            .collect())
    }

    pub async fn mark_attendance(&self, draft: NewAttendance) -> Result<Attendance, StoreError> {
        draft.validate()?;
        let record = self.append(draft.into_record(AttendanceId::generate())).await?;
        tracing::info!(
            student_id = %record.student_id,
            status = %record.status,
            "Attendance marked"
        );
        Ok(record)
    }

    pub async fn attendance(&self) -> Result<Vec<Attendance>, StoreError> {
        self.load_all().await
    }

    pub async fn attendance_for_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<Attendance>, StoreError> {
        Ok(self
            .attendance()
            .await?
            .into_iter()
            .filter(|a| &a.student_id == student_id)
            .collect())
    }

    pub async fn add_learning_outcome(
        &self,
        draft: NewLearningOutcome,
    ) -> Result<LearningOutcome, StoreError> {
        draft.validate()?;
        let outcome = self
            .append(draft.into_record(LearningOutcomeId::generate()))
            .await?;
        tracing::info!(student_id = %outcome.student_id, subject = %outcome.subject, "Learning outcome added");
        Ok(outcome)
    }

    pub async fn learning_outcomes(&self) -> Result<Vec<LearningOutcome>, StoreError> {
        self.load_all().await
    }

    pub async fn outcomes_for_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<LearningOutcome>, StoreError> {
        Ok(self
            .learning_outcomes()
            .await?
            .into_iter()
            .filter(|o| &o.student_id == student_id)
            .collect())
    }

    // === Medical ===

    pub async fn add_patient(&self, draft: NewPatient) -> Result<Patient, StoreError> {
        draft.validate()?;
        let patient = self.append(draft.into_record(PatientId::generate())).await?;
        tracing::info!(patient_id = %patient.id, opd_event_id = %patient.opd_event_id, "Patient added");
        Ok(patient)
    }

    pub async fn patients(&self) -> Result<Vec<Patient>, StoreError> {
        self.load_all().await
    }

    /// Case-insensitive search on name or diagnosis.
    pub async fn search_patients(&self, query: &str) -> Result<Vec<Patient>, StoreError> {
        let query = query.trim();
        Ok(self
            .patients()
            .await?
            .into_iter()
            .filter(|p| p.matches(query))
            .collect())
    }

    pub async fn add_opd_event(&self, draft: NewOpdEvent) -> Result<OpdEvent, StoreError> {
        draft.validate()?;
        let event = self.append(draft.into_record(OpdEventId::generate())).await?;
        tracing::info!(opd_event_id = %event.id, location = %event.location, "OPD event added");
        Ok(event)
    }

    pub async fn opd_events(&self) -> Result<Vec<OpdEvent>, StoreError> {
        self.load_all().await
    }

    // === Scholarships ===

    pub async fn add_scholar(&self, draft: NewScholar) -> Result<Scholar, StoreError> {
        draft.validate()?;
        let scholar = self.append(draft.into_record(ScholarId::generate())).await?;
        tracing::info!(scholar_id = %scholar.id, status = %scholar.status, "Scholar added");
        Ok(scholar)
    }

    pub async fn scholars(&self) -> Result<Vec<Scholar>, StoreError> {
        self.load_all().await
    }

    /// Case-insensitive search on name or education, optionally by status.
    pub async fn search_scholars(
        &self,
        query: &str,
        status: Option<ScholarStatus>,
    ) -> Result<Vec<Scholar>, StoreError> {
        let query = query.trim();
        Ok(self
            .scholars()
            .await?
            .into_iter()
            .filter(|s| s.matches(query, status))
            .collect())
    }

    /// Sum of amounts for scholars whose status is awarded.
    pub async fn total_awarded_amount(&self) -> Result<Decimal, StoreError> {
        Ok(awarded_sum(&self.scholars().await?))
    }

    // === Centers ===

    pub async fn add_center(&self, draft: NewCenter) -> Result<Center, StoreError> {
        draft.validate()?;
        let center = self.append(draft.into_record(CenterId::generate())).await?;
        tracing::info!(center_id = %center.id, center_type = %center.center_type, "Center added");
        Ok(center)
    }

    pub async fn centers(&self) -> Result<Vec<Center>, StoreError> {
        self.load_all().await
    }

    // === Derived ===

    /// Recomputed from the collections on every call.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, StoreError> {
        let scholars = self.scholars().await?;
        let counts = CollectionCounts {
            students: self.count(Collection::Students).await?,
            centers: self.count(Collection::Centers).await?,
            scholars: scholars.len(),
            patients: self.count(Collection::Patients).await?,
            opd_events: self.count(Collection::OpdEvents).await?,
            awarded_amount: awarded_sum(&scholars),
        };
        Ok(DashboardStats::project(&counts, &self.baseline))
    }

    /// Writes the two reference students and two reference centers under
    /// fixed ids. Running it again overwrites them with the same content.
    pub async fn seed_reference_data(&self) -> Result<(), StoreError> {
        for student in reference_students()? {
            self.put(&student).await?;
        }
        for center in reference_centers()? {
            self.put(&center).await?;
        }
        tracing::info!("Reference data seeded");
        Ok(())
    }
}

fn awarded_sum(scholars: &[Scholar]) -> Decimal {
    scholars
        .iter()
        .filter(|s| s.is_awarded())
        .fold(Decimal::ZERO, |total, s| total.saturating_add(s.amount))
}

fn reference_date(year: i32, month: u32, day: u32) -> Result<RecordDate, StoreError> {
    RecordDate::from_ymd(year, month, day)
        .ok_or_else(|| ValidationError::invalid_format("date", "invalid reference date").into())
}

fn reference_students() -> Result<Vec<Student>, StoreError> {
    let center = CenterId::new("center1")?;
    Ok(vec![
        Student {
            id: StudentId::new("1")?,
            name: "Aarav Kumar".to_string(),
            age: 10,
            grade: "5th".to_string(),
            parent_name: "Ramesh Kumar".to_string(),
            parent_phone: "+91 9876543210".to_string(),
            address: "123 Main Street, Delhi".to_string(),
            center_id: center.clone(),
            enrollment_date: reference_date(2024, 1, 15)?,
            is_active: true,
        },
        Student {
            id: StudentId::new("2")?,
            name: "Priya Singh".to_string(),
            age: 8,
            grade: "3rd".to_string(),
            parent_name: "Suresh Singh".to_string(),
            parent_phone: "+91 9876543211".to_string(),
            address: "456 Park Road, Mumbai".to_string(),
            center_id: center,
            enrollment_date: reference_date(2024, 2, 1)?,
            is_active: true,
        },
    ])
}

fn reference_centers() -> Result<Vec<Center>, StoreError> {
    Ok(vec![
        Center {
            id: CenterId::new("center1")?,
            name: "EKDKN Learning Center - Delhi".to_string(),
            center_type: CenterType::Education,
            address: "123 Education Street, Delhi".to_string(),
            incharge_name: "Priya Sharma".to_string(),
            incharge_phone: "+91 9876543211".to_string(),
            students_count: Some(45),
            teachers_count: Some(3),
            is_active: true,
        },
        Center {
            id: CenterId::new("center2")?,
            name: "EKDKN Medical Center - Mumbai".to_string(),
            center_type: CenterType::Opd,
            address: "456 Health Avenue, Mumbai".to_string(),
            incharge_name: "Dr. Amit Patel".to_string(),
            incharge_phone: "+91 9876543212".to_string(),
            students_count: None,
            teachers_count: None,
            is_active: true,
        },
    ])
}
