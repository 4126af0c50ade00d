//! Roster import from a JSON document of the form `{"employees": [...]}`.

use crate::domain::{DomainError, Employee};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// Read and validate a roster document. One bad record rejects the whole file.
pub async fn read_roster_document(path: &Path) -> Result<Vec<Employee>, DomainError> {
    let raw = fs::read_to_string(path)
        .await
        .map_err(|e| DomainError::Import(format!("{}: {}", path.display(), e)))?;
    parse_roster_document(&raw)
}

pub fn parse_roster_document(raw: &str) -> Result<Vec<Employee>, DomainError> {
    let doc: Value =
        serde_json::from_str(raw).map_err(|e| DomainError::Import(format!("invalid JSON: {}", e)))?;
    let Some(Value::Array(records)) = doc.get("employees") else {
        return Err(DomainError::invalid(
            "roster document must contain an \"employees\" array",
        ));
    };

    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            Employee::deserialize(record)
                .map_err(|e| DomainError::invalid(format!("employees[{}]: {}", i, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmployeeId, Gender};

    #[test]
    fn test_parse_roster_document() {
        let raw = r#"{"employees": [
            {"employeeId": 1, "fullName": "رشيد", "gender": "السيد", "city": "فاس",
             "workLocation": "المحكمة التجارية", "division": "الرئاسة",
             "jobTitle": "قاض", "postResponsibility": "رئيس المحكمة"},
            {"employeeId": "2", "fullName": "فاطمة", "gender": "السيدة"}
        ]}"#;
        let roster = parse_roster_document(raw).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].post_responsibility, "رئيس المحكمة");
        assert_eq!(roster[1].employee_id, EmployeeId(2));
        assert_eq!(roster[1].gender, Gender::Female);
        assert_eq!(roster[1].city, "");
    }

    #[test]
    fn test_missing_employees_array() {
        assert!(matches!(
            parse_roster_document(r#"{"staff": []}"#),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_roster_document(r#"{"employees": {}}"#),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_bad_record_names_its_index() {
        let raw = r#"{"employees": [
            {"employeeId": 1, "fullName": "a", "gender": "السيد"},
            {"employeeId": 2, "fullName": "b", "gender": "?"}
        ]}"#;
        match parse_roster_document(raw) {
            Err(DomainError::InvalidInput(msg)) => assert!(msg.contains("employees[1]")),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(
            parse_roster_document("employees"),
            Err(DomainError::Import(_))
        ));
    }
}
