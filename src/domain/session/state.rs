use crate::domain::foundation::{AccessPolicy, FunctionalArea, Language, Role};
use crate::domain::records::User;

use super::SessionToken;

/// Snapshot of a session.
///
/// Unauthenticated when `user` is `None`. The language survives logout.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    user: Option<User>,
    token: Option<SessionToken>,
    language: Language,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authenticate(&mut self, user: User, token: Option<SessionToken>) {
        self.user = Some(user);
        self.token = token;
    }

    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Navigation entries for the current identity; none when signed out.
    pub fn visible_areas(&self) -> Vec<FunctionalArea> {
        match self.role() {
            Some(role) => AccessPolicy::visible_areas(role).to_vec(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{RecordDate, UserId};

    fn doctor() -> User {
        User {
            id: UserId::new("3").unwrap(),
            name: "Dr. Amit Patel".to_string(),
            email: "doctor@ekdkn.org".to_string(),
            phone: "+91 9876543212".to_string(),
            role: Role::Doctor,
            profile_image: None,
            center_id: None,
            is_active: true,
            created_at: RecordDate::from_ymd(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn starts_unauthenticated_in_english() {
        let state = SessionState::new();
        assert!(!state.is_authenticated());
        assert_eq!(state.language(), Language::En);
        assert!(state.visible_areas().is_empty());
    }

    #[test]
    fn clear_keeps_language() {
        let mut state = SessionState::new();
        state.set_language(Language::Hi);
        state.authenticate(doctor(), None);
        assert_eq!(state.role(), Some(Role::Doctor));

        state.clear();

        assert!(state.user().is_none());
        assert!(state.token().is_none());
        assert_eq!(state.language(), Language::Hi);
    }

    #[test]
    fn doctor_sees_medical_but_not_education() {
        let mut state = SessionState::new();
        state.authenticate(doctor(), None);
        let areas = state.visible_areas();
        assert!(areas.contains(&FunctionalArea::Medical));
        assert!(!areas.contains(&FunctionalArea::Education));
    }
}
