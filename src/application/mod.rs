//! Application layer: session lifecycle, record store and the role-checked
//! handlers the screens call.

pub mod app;
pub mod forms;
pub mod handlers;
pub mod record_store;
pub mod session_manager;

pub use app::{demo_users, App, AppError};
pub use forms::{
    CenterForm, FormError, LoginForm, OpdEventForm, OutcomeForm, PatientForm, ScholarForm,
    SignupForm, StudentForm,
};
pub use handlers::{
    CenterHandler, EducationHandler, HandlerError, MedicalHandler, ScholarshipHandler,
    DEFAULT_CENTER, DEFAULT_OPD_EVENT,
};
pub use record_store::{RecordStore, StoreError};
pub use session_manager::{CredentialPolicy, SessionManager};
