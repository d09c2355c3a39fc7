//! Form layer: raw screen input to validated record drafts.
//!
//! Each form holds the strings exactly as typed. Conversion checks required
//! fields, parses numbers and fills the values the screens stamp themselves
//! (today's date, active flags, empty document lists). Lenient fields keep
//! their screen defaults: unparseable max marks become 100 and an
//! unparseable patient count becomes 0. Everything else that fails to parse
//! is rejected rather than silently replaced.

use std::str::FromStr;

use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::domain::foundation::{
    CenterId, OpdEventId, RecordDate, Role, StudentId, UserId, ValidationError,
};
use crate::domain::records::{
    CenterType, Gender, NewCenter, NewLearningOutcome, NewOpdEvent, NewPatient, NewScholar,
    NewStudent, ScholarStatus, SignupData, DEFAULT_MAX_MARKS,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(value)
}

fn parse_count(field: &'static str, value: &str) -> Result<u32, FormError> {
    required(field, value)?
        .parse()
        .map_err(|_| ValidationError::invalid_format(field, "expected a whole number").into())
}

fn optional_count(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, Default)]
pub struct StudentForm {
    pub name: String,
    pub age: String,
    pub grade: String,
    pub parent_name: String,
    pub parent_phone: String,
    pub address: String,
}

impl StudentForm {
    /// New students start active, enrolled today.
    pub fn into_draft(self, center_id: CenterId) -> Result<NewStudent, FormError> {
        let name = required("name", &self.name)?.to_string();
        let age = parse_count("age", &self.age)?;
        let grade = required("grade", &self.grade)?.to_string();
        Ok(NewStudent {
            name,
            age,
            grade,
            parent_name: self.parent_name.trim().to_string(),
            parent_phone: self.parent_phone.trim().to_string(),
            address: self.address.trim().to_string(),
            center_id,
            enrollment_date: RecordDate::today(),
            is_active: true,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct OutcomeForm {
    pub student_id: String,
    pub subject: String,
    pub marks: String,
    pub max_marks: String,
    pub exam_type: String,
}

impl OutcomeForm {
    pub fn into_draft(self, teacher_id: UserId) -> Result<NewLearningOutcome, FormError> {
        let student_id = StudentId::new(required("studentId", &self.student_id)?)?;
        let subject = required("subject", &self.subject)?.to_string();
        let marks = parse_count("marks", &self.marks)?;
        let max_marks = optional_count(&self.max_marks)
            .filter(|m| *m > 0)
            .unwrap_or(DEFAULT_MAX_MARKS);
        Ok(NewLearningOutcome {
            student_id,
            teacher_id,
            subject,
            marks,
            max_marks,
            exam_type: self.exam_type.trim().to_string(),
            date: RecordDate::today(),
            certificate: None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PatientForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub phone: String,
    pub address: String,
    pub diagnosis: String,
    pub prescription: String,
    pub opd_event_id: String,
}

impl Default for PatientForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            gender: "male".to_string(),
            phone: String::new(),
            address: String::new(),
            diagnosis: String::new(),
            prescription: String::new(),
            opd_event_id: String::new(),
        }
    }
}

impl PatientForm {
    /// `fallback_event` is used when the form does not name an OPD event.
    pub fn into_draft(
        self,
        doctor_id: UserId,
        fallback_event: OpdEventId,
    ) -> Result<NewPatient, FormError> {
        let name = required("name", &self.name)?.to_string();
        let age = parse_count("age", &self.age)?;
        let diagnosis = required("diagnosis", &self.diagnosis)?.to_string();
        let gender = Gender::parse(&self.gender).ok_or_else(|| {
            ValidationError::invalid_format("gender", "must be male, female or other")
        })?;
        let opd_event_id = match optional_text(&self.opd_event_id) {
            Some(id) => OpdEventId::new(id)?,
            None => fallback_event,
        };
        Ok(NewPatient {
            name,
            age,
            gender,
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            opd_event_id,
            visit_date: RecordDate::today(),
            diagnosis,
            prescription: self.prescription.trim().to_string(),
            doctor_id,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct OpdEventForm {
    pub location: String,
    pub incharge_name: String,
    pub incharge_phone: String,
    pub patients_count: String,
}

impl OpdEventForm {
    pub fn into_draft(self, doctor_id: UserId) -> Result<NewOpdEvent, FormError> {
        let location = required("location", &self.location)?.to_string();
        let incharge_name = required("inchargeName", &self.incharge_name)?.to_string();
        Ok(NewOpdEvent {
            location,
            incharge_name,
            incharge_phone: self.incharge_phone.trim().to_string(),
            date: RecordDate::today(),
            patients_count: optional_count(&self.patients_count).unwrap_or(0),
            doctor_id,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ScholarForm {
    pub name: String,
    pub age: String,
    pub education: String,
    pub amount: String,
    pub status: String,
}

impl Default for ScholarForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            education: String::new(),
            amount: String::new(),
            status: "pending".to_string(),
        }
    }
}

impl ScholarForm {
    pub fn into_draft(self) -> Result<NewScholar, FormError> {
        let name = required("name", &self.name)?.to_string();
        let education = required("education", &self.education)?.to_string();
        let amount = Decimal::from_str(required("amount", &self.amount)?)
            .map_err(|_| ValidationError::invalid_format("amount", "expected a number"))?;
        let age = parse_count("age", &self.age)?;
        let status = ScholarStatus::parse(&self.status).ok_or_else(|| {
            ValidationError::invalid_format("status", "must be awarded, pending or completed")
        })?;
        Ok(NewScholar {
            name,
            age,
            education,
            amount,
            awarded_date: RecordDate::today(),
            status,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CenterForm {
    pub name: String,
    pub center_type: String,
    pub address: String,
    pub incharge_name: String,
    pub incharge_phone: String,
    pub students_count: String,
    pub teachers_count: String,
}

impl CenterForm {
    pub fn into_draft(self) -> Result<NewCenter, FormError> {
        let name = required("name", &self.name)?.to_string();
        let center_type = CenterType::parse(required("type", &self.center_type)?)
            .ok_or_else(|| ValidationError::invalid_format("type", "must be education or opd"))?;
        let address = required("address", &self.address)?.to_string();
        Ok(NewCenter {
            name,
            center_type,
            address,
            incharge_name: self.incharge_name.trim().to_string(),
            incharge_phone: self.incharge_phone.trim().to_string(),
            students_count: optional_count(&self.students_count),
            teachers_count: optional_count(&self.teachers_count),
            is_active: true,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub role: Role,
    pub center_id: String,
}

impl SignupForm {
    /// Password length is checked later by the session's credential policy.
    pub fn into_signup(self) -> Result<SignupData, FormError> {
        let name = required("name", &self.name)?.to_string();
        let email = required("email", &self.email)?.to_string();
        let phone = required("phone", &self.phone)?.to_string();
        required("password", self.password.expose_secret())?;
        if self.password.expose_secret() != self.confirm_password.expose_secret() {
            return Err(FormError::PasswordMismatch);
        }
        let center_id = optional_text(&self.center_id).map(CenterId::new).transpose()?;
        Ok(SignupData {
            name,
            email,
            phone,
            password: self.password,
            role: self.role,
            center_id,
        })
    }
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

impl LoginForm {
    /// Returns the trimmed email once both fields are filled in.
    pub fn check(&self) -> Result<&str, FormError> {
        let email = required("email", &self.email)?;
        required("password", self.password.expose_secret())?;
        Ok(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string())
    }

    #[test]
    fn student_form_requires_name_age_grade() {
        let form = StudentForm {
            name: "A".into(),
            age: "".into(),
            grade: "5th".into(),
            ..Default::default()
        };
        assert_eq!(
            form.into_draft(CenterId::new("center1").unwrap()),
            Err(FormError::MissingField("age"))
        );
    }

    #[test]
    fn student_form_rejects_non_numeric_age() {
        let form = StudentForm {
            name: "A".into(),
            age: "ten".into(),
            grade: "5th".into(),
            ..Default::default()
        };
        let err = form.into_draft(CenterId::new("center1").unwrap()).unwrap_err();
        assert!(matches!(err, FormError::Invalid(e) if e.field() == "age"));
    }

    #[test]
    fn student_form_stamps_today_and_active() {
        let draft = StudentForm {
            name: " A ".into(),
            age: "10".into(),
            grade: "5th".into(),
            ..Default::default()
        }
        .into_draft(CenterId::new("center1").unwrap())
        .unwrap();
        assert_eq!(draft.name, "A");
        assert_eq!(draft.age, 10);
        assert_eq!(draft.enrollment_date, RecordDate::today());
        assert!(draft.is_active);
    }

    #[test]
    fn outcome_max_marks_defaults_to_100() {
        for raw in ["", "abc", "0"] {
            let draft = OutcomeForm {
                student_id: "1".into(),
                subject: "Maths".into(),
                marks: "45".into(),
                max_marks: raw.into(),
                exam_type: "Unit Test".into(),
            }
            .into_draft(UserId::new("t").unwrap())
            .unwrap();
            assert_eq!(draft.max_marks, 100, "input {:?}", raw);
        }
    }

    #[test]
    fn outcome_keeps_explicit_max_marks() {
        let draft = OutcomeForm {
            student_id: "1".into(),
            subject: "Maths".into(),
            marks: "18".into(),
            max_marks: "20".into(),
            exam_type: String::new(),
        }
        .into_draft(UserId::new("t").unwrap())
        .unwrap();
        assert_eq!(draft.max_marks, 20);
    }

    #[test]
    fn patient_form_falls_back_to_given_event() {
        let draft = PatientForm {
            name: "Ravi".into(),
            age: "30".into(),
            diagnosis: "Cough".into(),
            ..Default::default()
        }
        .into_draft(UserId::new("d").unwrap(), OpdEventId::new("event1").unwrap())
        .unwrap();
        assert_eq!(draft.opd_event_id.as_str(), "event1");
        assert_eq!(draft.gender, Gender::Male);
    }

    #[test]
    fn patient_form_rejects_unknown_gender() {
        let result = PatientForm {
            name: "Ravi".into(),
            age: "30".into(),
            diagnosis: "Cough".into(),
            gender: "x".into(),
            ..Default::default()
        }
        .into_draft(UserId::new("d").unwrap(), OpdEventId::new("event1").unwrap());
        assert!(matches!(result, Err(FormError::Invalid(_))));
    }

    #[test]
    fn opd_patients_count_defaults_to_zero() {
        let draft = OpdEventForm {
            location: "Rampur".into(),
            incharge_name: "Mohan".into(),
            incharge_phone: String::new(),
            patients_count: "lots".into(),
        }
        .into_draft(UserId::new("d").unwrap())
        .unwrap();
        assert_eq!(draft.patients_count, 0);
    }

    #[test]
    fn scholar_amount_parses_from_text() {
        let draft = ScholarForm {
            name: "Neha".into(),
            age: "19".into(),
            education: "B.Sc".into(),
            amount: "5000".into(),
            status: "awarded".into(),
        }
        .into_draft()
        .unwrap();
        assert_eq!(draft.amount, Decimal::new(5000, 0));
        assert_eq!(draft.status, ScholarStatus::Awarded);
    }

    #[test]
    fn scholar_amount_must_be_numeric() {
        let result = ScholarForm {
            name: "Neha".into(),
            age: "19".into(),
            education: "B.Sc".into(),
            amount: "five thousand".into(),
            ..Default::default()
        }
        .into_draft();
        assert!(matches!(result, Err(FormError::Invalid(e)) if e.field() == "amount"));
    }

    #[test]
    fn center_form_parses_type() {
        let draft = CenterForm {
            name: "Clinic".into(),
            center_type: "opd".into(),
            address: "Mumbai".into(),
            teachers_count: "n/a".into(),
            ..Default::default()
        }
        .into_draft()
        .unwrap();
        assert_eq!(draft.center_type, CenterType::Opd);
        assert_eq!(draft.teachers_count, None);
    }

    #[test]
    fn signup_form_checks_confirmation() {
        let form = SignupForm {
            name: "N".into(),
            email: "n@x.org".into(),
            phone: "1".into(),
            password: secret("abcdef"),
            confirm_password: secret("abcdeg"),
            role: Role::Teacher,
            center_id: String::new(),
        };
        assert_eq!(form.into_signup().unwrap_err(), FormError::PasswordMismatch);
    }

    #[test]
    fn signup_form_blank_center_is_none() {
        let data = SignupForm {
            name: "N".into(),
            email: "n@x.org".into(),
            phone: "1".into(),
            password: secret("abcdef"),
            confirm_password: secret("abcdef"),
            role: Role::Doctor,
            center_id: "  ".into(),
        }
        .into_signup()
        .unwrap();
        assert!(data.center_id.is_none());
    }

    #[test]
    fn login_form_requires_both_fields() {
        let form = LoginForm {
            email: "a@b.org".into(),
            password: secret(""),
        };
        assert_eq!(form.check().unwrap_err(), FormError::MissingField("password"));
    }
}
