//! Employee domain model.
//!
//! An [`EmployeeRecord`] is the server's view of one employee: a server-assigned
//! [`EmployeeId`] plus five editable fields. [`EmployeeFields`] is the same data
//! without identity, which is exactly what create and update requests carry.
//!
//! # Wire shape
//!
//! ```json
//! {"id": "5f0c…", "name": "Ada", "email": "ada@example.com",
//!  "department": "Eng", "salary": 1000.0, "age": 30}
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque, server-assigned employee identity.
///
/// The reference service issues UUID strings, but numeric identities are
/// accepted too and kept in their decimal form. The value is never edited
/// locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Unsigned(n) => Self(n.to_string()),
            RawId::Signed(n) => Self(n.to_string()),
        })
    }
}

/// A persisted employee as returned by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub department: String,
    pub salary: f64,
    pub age: u32,
}

impl EmployeeRecord {
    /// Returns the editable part of the record, dropping identity.
    #[must_use]
    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
            salary: self.salary,
            age: self.age,
        }
    }
}

/// Employee fields without identity, used as the create/update request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFields {
    pub name: String,
    pub email: String,
    pub department: String,
    pub salary: f64,
    pub age: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_with_uuid_identity() {
        let json = r#"{"id":"0b6f3c1e-2a4d-4c55-9f0e-1d2c3b4a5f60","name":"Ada","email":"ada@example.com","department":"Eng","salary":1000.5,"age":30}"#;
        let record: EmployeeRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id.as_str(), "0b6f3c1e-2a4d-4c55-9f0e-1d2c3b4a5f60");
        assert_eq!(record.salary, 1000.5);
        assert_eq!(record.age, 30);
    }

    #[test]
    fn numeric_identity_is_kept_as_decimal_text() {
        let json = r#"{"id":7,"name":"Bo","email":"bo@x.io","department":"Ops","salary":0,"age":18}"#;
        let record: EmployeeRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, EmployeeId::new("7"));
    }

    #[test]
    fn record_fields_drop_identity() {
        let json = r#"{"id":"e-1","name":"Bo","email":"bo@x.io","department":"Ops","salary":250.5,"age":41}"#;
        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        let fields = record.fields();

        assert_eq!(fields.name, "Bo");
        assert_eq!(fields.salary, 250.5);
        assert_eq!(fields.age, 41);
        assert!(serde_json::to_value(&fields).unwrap().get("id").is_none());
    }

    #[test]
    fn fields_payload_has_no_identity() {
        let fields = EmployeeFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            department: "Eng".into(),
            salary: 1000.0,
            age: 30,
        };
        let value = serde_json::to_value(&fields).unwrap();

        assert!(value.get("id").is_none());
        assert_eq!(value["salary"], serde_json::json!(1000.0));
        assert_eq!(value["age"], serde_json::json!(30));
    }
}
