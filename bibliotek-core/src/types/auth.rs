//! Login credential and profile types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a student submits at the login form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentCredentials {
    pub name: String,
    pub roll_no: String,
    pub department: String,
    pub year: String,
}

/// The logged-in student record the catalog echoes back
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub name: String,

    #[serde(default)]
    pub roll_no: Option<String>,

    #[serde(default)]
    pub department: Option<String>,

    #[serde(default)]
    pub year: Option<String>,

    #[serde(default)]
    pub login_time: Option<DateTime<Utc>>,
}

/// Administrator credentials
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_wire_shape() {
        let creds = StudentCredentials {
            name: "Asha".into(),
            roll_no: "21CS042".into(),
            department: "Computer Science".into(),
            year: "III".into(),
        };
        let json = serde_json::to_string(&creds).unwrap();
        assert!(json.contains("\"rollNo\":\"21CS042\""));
    }

    #[test]
    fn test_profile_from_backend_json() {
        let json = r#"{
            "name": "Asha",
            "rollNo": "21CS042",
            "department": "Computer Science",
            "year": "III",
            "loginTime": "2024-02-11T09:30:00.000Z"
        }"#;
        let profile: StudentProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.roll_no.as_deref(), Some("21CS042"));
        assert!(profile.login_time.is_some());
    }
}
