use std::sync::Arc;

use rust_decimal::Decimal;

use crate::application::forms::ScholarForm;
use crate::application::record_store::RecordStore;
use crate::application::session_manager::SessionManager;
use crate::domain::foundation::{Action, RecordKind};
use crate::domain::records::{Scholar, ScholarStatus};

use super::{authorize, HandlerError};

/// Scholarship screen. Admin only.
pub struct ScholarshipHandler {
    session: Arc<SessionManager>,
    store: Arc<RecordStore>,
}

impl ScholarshipHandler {
    pub fn new(session: Arc<SessionManager>, store: Arc<RecordStore>) -> Self {
        Self { session, store }
    }

    pub async fn scholars(
        &self,
        query: &str,
        status: Option<ScholarStatus>,
    ) -> Result<Vec<Scholar>, HandlerError> {
        authorize(&self.session, Action::View, RecordKind::Scholar).await?;
        Ok(self.store.search_scholars(query, status).await?)
    }

    pub async fn add_scholar(&self, form: ScholarForm) -> Result<Scholar, HandlerError> {
        authorize(&self.session, Action::Create, RecordKind::Scholar).await?;
        let draft = form.into_draft()?;
        Ok(self.store.add_scholar(draft).await?)
    }

    pub async fn total_awarded(&self) -> Result<Decimal, HandlerError> {
        authorize(&self.session, Action::View, RecordKind::Scholar).await?;
        Ok(self.store.total_awarded_amount().await?)
    }
}
