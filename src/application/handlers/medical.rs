//! Medical screen: patients and OPD wheel events.

use std::sync::Arc;

use crate::application::forms::{FormError, OpdEventForm, PatientForm};
use crate::application::record_store::RecordStore;
use crate::application::session_manager::SessionManager;
use crate::domain::foundation::{Action, OpdEventId, RecordKind};
use crate::domain::records::{OpdEvent, Patient};

use super::{authorize, HandlerError};

/// OPD event a patient is filed under when the form names none.
pub const DEFAULT_OPD_EVENT: &str = "event1";

pub struct MedicalHandler {
    session: Arc<SessionManager>,
    store: Arc<RecordStore>,
}

impl MedicalHandler {
    pub fn new(session: Arc<SessionManager>, store: Arc<RecordStore>) -> Self {
        Self { session, store }
    }

    /// Patients matching `query` on name or diagnosis.
    pub async fn patients(&self, query: &str) -> Result<Vec<Patient>, HandlerError> {
        authorize(&self.session, Action::View, RecordKind::Patient).await?;
        Ok(self.store.search_patients(query).await?)
    }

    /// The signed-in user is recorded as the treating doctor.
    pub async fn add_patient(&self, form: PatientForm) -> Result<Patient, HandlerError> {
        let user = authorize(&self.session, Action::Create, RecordKind::Patient).await?;
        let fallback = OpdEventId::new(DEFAULT_OPD_EVENT).map_err(FormError::from)?;
        let draft = form.into_draft(user.id, fallback)?;
        Ok(self.store.add_patient(draft).await?)
    }

    pub async fn opd_events(&self) -> Result<Vec<OpdEvent>, HandlerError> {
        authorize(&self.session, Action::View, RecordKind::OpdEvent).await?;
        Ok(self.store.opd_events().await?)
    }

    pub async fn add_opd_event(&self, form: OpdEventForm) -> Result<OpdEvent, HandlerError> {
        let user = authorize(&self.session, Action::Create, RecordKind::OpdEvent).await?;
        let draft = form.into_draft(user.id)?;
        Ok(self.store.add_opd_event(draft).await?)
    }
}
