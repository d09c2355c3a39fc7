//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the EKDKN domain.

mod auth;
mod authorization;
mod errors;
mod ids;
mod language;
mod record_date;
mod role;
mod timestamp;

pub use auth::AuthError;
pub use authorization::{AccessPolicy, Action, AuthorizationContext, AuthorizationResult, RecordKind};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    AttendanceId, CenterId, LearningOutcomeId, OpdEventId, PatientId, ScholarId, StudentId, UserId,
};
pub use language::Language;
pub use record_date::RecordDate;
pub use role::{FunctionalArea, Role};
pub use timestamp::Timestamp;
