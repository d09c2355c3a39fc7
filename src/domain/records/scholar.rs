//! Scholarship recipients.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::validate::{age_in_range, amount_in_range, non_negative, required};
use super::{Collection, Record};
use crate::domain::foundation::{RecordDate, ScholarId, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScholarStatus {
    Awarded,
    Pending,
    Completed,
}

impl ScholarStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "awarded" => Some(ScholarStatus::Awarded),
            "pending" => Some(ScholarStatus::Pending),
            "completed" => Some(ScholarStatus::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for ScholarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScholarStatus::Awarded => "awarded",
            ScholarStatus::Pending => "pending",
            ScholarStatus::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scholar {
    pub id: ScholarId,
    pub name: String,
    pub age: u32,
    /// Education level, e.g. "B.Sc 2nd year".
    pub education: String,
    /// Stored as a decimal string so every accepted amount reads back exactly.
    pub amount: Decimal,
    pub awarded_date: RecordDate,
    pub status: ScholarStatus,
    #[serde(default)]
    pub documents: Vec<String>,
}

impl Scholar {
    pub fn is_awarded(&self) -> bool {
        self.status == ScholarStatus::Awarded
    }

    /// Case-insensitive match on name or education, optionally narrowed by status.
    pub fn matches(&self, query: &str, status: Option<ScholarStatus>) -> bool {
        if let Some(status) = status {
            if self.status != status {
                return false;
            }
        }
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.education.to_lowercase().contains(&query)
    }
}

impl Record for Scholar {
    const COLLECTION: Collection = Collection::Scholars;

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScholar {
    pub name: String,
    pub age: u32,
    pub education: String,
    pub amount: Decimal,
    pub awarded_date: RecordDate,
    pub status: ScholarStatus,
}

impl NewScholar {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        required("education", &self.education)?;
        age_in_range("age", self.age, 1)?;
        non_negative("amount", self.amount)?;
        amount_in_range("amount", self.amount)
    }

    /// New scholars never carry documents; uploads attach them later.
    pub fn into_record(self, id: ScholarId) -> Scholar {
        Scholar {
            id,
            name: self.name,
            age: self.age,
            education: self.education,
            amount: self.amount,
            awarded_date: self.awarded_date,
            status: self.status,
            documents: Vec::new(),
        }
    }
}
