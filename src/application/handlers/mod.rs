//! Role-checked handlers used by the screens.
//!
//! Every handler call resolves the signed-in user, checks the access policy
//! for the record kind, converts the form and only then touches the store.

mod center;
mod education;
mod medical;
mod scholarship;

pub use center::CenterHandler;
pub use education::{EducationHandler, DEFAULT_CENTER};
pub use medical::{MedicalHandler, DEFAULT_OPD_EVENT};
pub use scholarship::ScholarshipHandler;

use thiserror::Error;

use crate::application::forms::FormError;
use crate::application::record_store::StoreError;
use crate::application::session_manager::SessionManager;
use crate::domain::foundation::{AccessPolicy, Action, AuthorizationContext, RecordKind};
use crate::domain::records::User;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid form: {0}")]
    Form(#[from] FormError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Returns the signed-in user if their role may perform `action` on `kind`.
pub(crate) async fn authorize(
    session: &SessionManager,
    action: Action,
    kind: RecordKind,
) -> Result<User, HandlerError> {
    let user = session
        .current_user()
        .await
        .ok_or(HandlerError::NotAuthenticated)?;

    let ctx = AuthorizationContext::new(user.id.clone(), user.role, action, kind);
    let result = AccessPolicy::authorize(&ctx);
    if result.is_denied() {
        tracing::warn!(
            user_id = %result.user_id,
            resource_type = result.resource_type,
            reason = result.denial_reason.as_deref().unwrap_or_default(),
            "Access denied"
        );
    }
    result
        .into_result()
        .map_err(|e| HandlerError::Forbidden(e.message))?;
    Ok(user)
}
