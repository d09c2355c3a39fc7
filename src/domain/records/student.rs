//! Enrolled students.

use serde::{Deserialize, Serialize};

use super::validate::{age_in_range, required};
use super::{Collection, Record};
use crate::domain::foundation::{CenterId, RecordDate, StudentId, ValidationError};

/// A child enrolled at an education center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: u32,
    pub grade: String,
    pub parent_name: String,
    pub parent_phone: String,
    pub address: String,
    pub center_id: CenterId,
    pub enrollment_date: RecordDate,
    pub is_active: bool,
}

impl Student {
    /// Merges the set fields of `update`, leaving every other field untouched.
    pub fn apply(&mut self, update: StudentUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(grade) = update.grade {
            self.grade = grade;
        }
        if let Some(parent_name) = update.parent_name {
            self.parent_name = parent_name;
        }
        if let Some(parent_phone) = update.parent_phone {
            self.parent_phone = parent_phone;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(center_id) = update.center_id {
            self.center_id = center_id;
        }
        if let Some(enrollment_date) = update.enrollment_date {
            self.enrollment_date = enrollment_date;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
    }

    /// Case-insensitive match on name or grade.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.grade.to_lowercase().contains(&query)
    }
}

impl Record for Student {
    const COLLECTION: Collection = Collection::Students;

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

/// A student before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub age: u32,
    pub grade: String,
    pub parent_name: String,
    pub parent_phone: String,
    pub address: String,
    pub center_id: CenterId,
    pub enrollment_date: RecordDate,
    pub is_active: bool,
}

impl NewStudent {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        required("grade", &self.grade)?;
        age_in_range("age", self.age, 1)
    }

    pub fn into_record(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name,
            age: self.age,
            grade: self.grade,
            parent_name: self.parent_name,
            parent_phone: self.parent_phone,
            address: self.address,
            center_id: self.center_id,
            enrollment_date: self.enrollment_date,
            is_active: self.is_active,
        }
    }
}

/// Partial update of a student. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub grade: Option<String>,
    pub parent_name: Option<String>,
    pub parent_phone: Option<String>,
    pub address: Option<String>,
    pub center_id: Option<CenterId>,
    pub enrollment_date: Option<RecordDate>,
    pub is_active: Option<bool>,
}

impl StudentUpdate {
    /// Applies the same field rules as a new student, to the fields that are set.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            required("name", name)?;
        }
        if let Some(grade) = &self.grade {
            required("grade", grade)?;
        }
        if let Some(age) = self.age {
            age_in_range("age", age, 1)?;
        }
        Ok(())
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == StudentUpdate::default()
    }
}
