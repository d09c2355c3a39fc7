//! Patients seen at mobile clinic (OPD) events.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::validate::{age_in_range, required};
use super::{Collection, Record};
use crate::domain::foundation::{OpdEventId, PatientId, RecordDate, UserId, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parses the lowercase wire form.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub phone: String,
    pub address: String,
    pub opd_event_id: OpdEventId,
    pub visit_date: RecordDate,
    pub diagnosis: String,
    pub prescription: String,
    pub doctor_id: UserId,
}

impl Patient {
    /// Case-insensitive match on name or diagnosis.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.diagnosis.to_lowercase().contains(&query)
    }
}

impl Record for Patient {
    const COLLECTION: Collection = Collection::Patients;

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub phone: String,
    pub address: String,
    pub opd_event_id: OpdEventId,
    pub visit_date: RecordDate,
    pub diagnosis: String,
    pub prescription: String,
    pub doctor_id: UserId,
}

impl NewPatient {
    /// Newborns are recorded with age 0.
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        age_in_range("age", self.age, 0)
    }

    pub fn into_record(self, id: PatientId) -> Patient {
        Patient {
            id,
            name: self.name,
            age: self.age,
            gender: self.gender,
            phone: self.phone,
            address: self.address,
            opd_event_id: self.opd_event_id,
            visit_date: self.visit_date,
            diagnosis: self.diagnosis,
            prescription: self.prescription,
            doctor_id: self.doctor_id,
        }
    }
}
