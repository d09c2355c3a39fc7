use std::sync::Arc;

use crate::application::forms::CenterForm;
use crate::application::record_store::RecordStore;
use crate::application::session_manager::SessionManager;
use crate::domain::foundation::{Action, RecordKind};
use crate::domain::records::Center;

use super::{authorize, HandlerError};

/// Center registry. Admin only.
pub struct CenterHandler {
    session: Arc<SessionManager>,
    store: Arc<RecordStore>,
}

impl CenterHandler {
    pub fn new(session: Arc<SessionManager>, store: Arc<RecordStore>) -> Self {
        Self { session, store }
    }

    pub async fn centers(&self) -> Result<Vec<Center>, HandlerError> {
        authorize(&self.session, Action::View, RecordKind::Center).await?;
        Ok(self.store.centers().await?)
    }

    pub async fn add_center(&self, form: CenterForm) -> Result<Center, HandlerError> {
        authorize(&self.session, Action::Create, RecordKind::Center).await?;
        let draft = form.into_draft()?;
        Ok(self.store.add_center(draft).await?)
    }
}
