//! Domain layer: value objects, records and the pure rules over them.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, dates, roles, errors, access policy)
//! - `records` - The persisted business entities and their drafts
//! - `session` - Current identity and language
//! - `dashboard` - Read-time summary projection

pub mod dashboard;
pub mod foundation;
pub mod records;
pub mod session;
