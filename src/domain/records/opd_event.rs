use serde::{Deserialize, Serialize};

use super::validate::required;
use super::{Collection, Record};
use crate::domain::foundation::{OpdEventId, RecordDate, UserId, ValidationError};

/// One mobile clinic ("OPD wheel") visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpdEvent {
    pub id: OpdEventId,
    pub location: String,
    pub incharge_name: String,
    pub incharge_phone: String,
    pub date: RecordDate,
    #[serde(default)]
    pub patients_count: u32,
    pub doctor_id: UserId,
}

impl Record for OpdEvent {
    const COLLECTION: Collection = Collection::OpdEvents;

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOpdEvent {
    pub location: String,
    pub incharge_name: String,
    pub incharge_phone: String,
    pub date: RecordDate,
    pub patients_count: u32,
    pub doctor_id: UserId,
}

impl NewOpdEvent {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("location", &self.location)?;
        required("inchargeName", &self.incharge_name)
    }

    pub fn into_record(self, id: OpdEventId) -> OpdEvent {
        OpdEvent {
            id,
            location: self.location,
            incharge_name: self.incharge_name,
            incharge_phone: self.incharge_phone,
            date: self.date,
            patients_count: self.patients_count,
            doctor_id: self.doctor_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_patients_count_deserializes_as_zero() {
        let json = serde_json::json!({
            "id": "event1",
            "location": "Rampur",
            "inchargeName": "Mohan Lal",
            "inchargePhone": "+91 9000000001",
            "date": "2024-04-05",
            "doctorId": "d-1"
        });
        let event: OpdEvent = serde_json::from_value(json).unwrap();
        assert_eq!(event.patients_count, 0);
    }

    #[test]
    fn validate_requires_location() {
        let draft = NewOpdEvent {
            location: " ".to_string(),
            incharge_name: "Mohan Lal".to_string(),
            incharge_phone: String::new(),
            date: RecordDate::today(),
            patients_count: 0,
            doctor_id: UserId::new("d-1").unwrap(),
        };
        assert_eq!(draft.validate().unwrap_err().field(), "location");
    }
}
