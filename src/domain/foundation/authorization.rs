//! Role-based authorization.
//!
//! This module provides foundation-level authorization support:
//! - `AccessPolicy` - which roles see which areas and manage which records
//! - `AuthorizationContext` - Structured context for authorization decisions
//! - `AuthorizationResult` - Standard result type for authorization checks
//!
//! # Pattern
//!
//! Handlers follow a consistent sequence:
//! 1. Build an `AuthorizationContext` from the signed-in user
//! 2. Ask `AccessPolicy::authorize` for a decision
//! 3. Log the result (success or failure)
//! 4. Convert with `into_result()` and propagate
//!
//! ```text
//! Area visibility           Record management
//! admin   -> all six        admin   -> every record kind
//! teacher -> dashboard,     teacher -> students, attendance,
//!            education,                learning outcomes
//!            upload, profile
//! doctor  -> dashboard,     doctor  -> patients, OPD events
//!            medical,
//!            upload, profile
//! other   -> dashboard,     other   -> nothing
//!            profile
//! ```

use std::fmt;

use super::{DomainError, ErrorCode, FunctionalArea, Role, UserId};

/// Kinds of domain records a role may view or mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Student,
    Attendance,
    LearningOutcome,
    Patient,
    OpdEvent,
    Scholar,
    Center,
}

impl RecordKind {
    /// The type name used in authorization logs.
    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Student => "Student",
            RecordKind::Attendance => "Attendance",
            RecordKind::LearningOutcome => "LearningOutcome",
            RecordKind::Patient => "Patient",
            RecordKind::OpdEvent => "OpdEvent",
            RecordKind::Scholar => "Scholar",
            RecordKind::Center => "Center",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What the caller wants to do with a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    View,
    Create,
    Update,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Update => "update",
        };
        write!(f, "{}", s)
    }
}

/// Result of an authorization check.
///
/// Contains both the decision and context for logging.
#[derive(Debug, Clone)]
pub struct AuthorizationResult {
    /// Whether access was granted.
    pub granted: bool,

    /// The record type being accessed (e.g., "Student", "Patient").
    pub resource_type: &'static str,

    /// The ID of the record being accessed, if it already exists.
    pub resource_id: Option<String>,

    /// The user who requested access.
    pub user_id: String,

    /// Optional reason for denial (if denied).
    pub denial_reason: Option<String>,
}

impl AuthorizationResult {
    /// Creates a successful authorization result.
    pub fn granted(
        resource_type: &'static str,
        resource_id: Option<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            granted: true,
            resource_type,
            resource_id,
            user_id: user_id.into(),
            denial_reason: None,
        }
    }

    /// Creates a denied authorization result.
    pub fn denied(
        resource_type: &'static str,
        resource_id: Option<String>,
        user_id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            granted: false,
            resource_type,
            resource_id,
            user_id: user_id.into(),
            denial_reason: Some(reason.into()),
        }
    }

    /// Converts this result to a `Result<(), DomainError>`.
    ///
    /// Returns `Ok(())` if granted, `Err(Forbidden)` if denied.
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.granted {
            return Ok(());
        }
        let mut err = DomainError::new(
            ErrorCode::Forbidden,
            self.denial_reason
                .unwrap_or_else(|| "Access denied".to_string()),
        )
        .with_detail("resource_type", self.resource_type)
        .with_detail("user_id", self.user_id);
        if let Some(id) = self.resource_id {
            err = err.with_detail("resource_id", id);
        }
        Err(err)
    }

    /// Returns true if access was granted.
    pub fn is_granted(&self) -> bool {
        self.granted
    }

    /// Returns true if access was denied.
    pub fn is_denied(&self) -> bool {
        !self.granted
    }
}

/// Context for authorization decisions.
///
/// Captures the "who, what, which" of an authorization request for
/// consistent logging across all handlers.
#[derive(Debug, Clone)]
pub struct AuthorizationContext {
    /// The user requesting access.
    pub user_id: UserId,

    /// Role of the requesting user at the time of the request.
    pub role: Role,

    /// The action being performed.
    pub action: Action,

    /// The kind of record.
    pub kind: RecordKind,

    /// The specific record, when acting on an existing one.
    pub resource_id: Option<String>,
}

impl AuthorizationContext {
    /// Creates a new authorization context.
    pub fn new(user_id: UserId, role: Role, action: Action, kind: RecordKind) -> Self {
        Self {
            user_id,
            role,
            action,
            kind,
            resource_id: None,
        }
    }

    /// Targets a specific existing record.
    pub fn for_resource(mut self, id: impl Into<String>) -> Self {
        self.resource_id = Some(id.into());
        self
    }

    /// Creates an `AuthorizationResult` for granted access.
    pub fn grant(&self) -> AuthorizationResult {
        AuthorizationResult::granted(
            self.kind.name(),
            self.resource_id.clone(),
            self.user_id.to_string(),
        )
    }

    /// Creates an `AuthorizationResult` for denied access.
    pub fn deny(&self, reason: impl Into<String>) -> AuthorizationResult {
        AuthorizationResult::denied(
            self.kind.name(),
            self.resource_id.clone(),
            self.user_id.to_string(),
            reason,
        )
    }
}

/// Static role policy shared by navigation and record handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    /// Navigation areas visible to a role, in display order.
    pub fn visible_areas(role: Role) -> &'static [FunctionalArea] {
        use FunctionalArea::*;
        match role {
            Role::Admin => &[Dashboard, Education, Medical, Scholarships, Upload, Profile],
            Role::Teacher => &[Dashboard, Education, Upload, Profile],
            Role::Doctor => &[Dashboard, Medical, Upload, Profile],
            Role::Unrecognized => &[Dashboard, Profile],
        }
    }

    /// Returns true if the role may open the area.
    pub fn can_view_area(role: Role, area: FunctionalArea) -> bool {
        Self::visible_areas(role).contains(&area)
    }

    /// Returns true if the role may view and mutate records of this kind.
    pub fn can_manage(role: Role, kind: RecordKind) -> bool {
        use RecordKind::*;
        match role {
            Role::Admin => true,
            Role::Teacher => matches!(kind, Student | Attendance | LearningOutcome),
            Role::Doctor => matches!(kind, Patient | OpdEvent),
            Role::Unrecognized => false,
        }
    }

    /// Decides an authorization request.
    pub fn authorize(ctx: &AuthorizationContext) -> AuthorizationResult {
        if Self::can_manage(ctx.role, ctx.kind) {
            ctx.grant()
        } else {
            ctx.deny(format!(
                "Role {} may not {} {} records",
                ctx.role, ctx.action, ctx.kind
            ))
        }
    }
}
