//! Admin dashboard aggregates and reader feedback types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Login aggregates served by the catalog's admin endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_logins: u64,

    /// Logins per department, keyed by department name
    #[serde(default)]
    pub dept_wise_logins: BTreeMap<String, u64>,

    #[serde(default)]
    pub student_usage: Vec<StudentUsage>,
}

/// One reading-session record in the usage log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentUsage {
    pub name: String,

    /// Session length in minutes
    #[serde(default)]
    pub duration: f64,

    /// Locale-formatted date string, kept opaque
    #[serde(default)]
    pub date: Option<String>,
}

/// A rating-and-review entry for a book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub student_name: String,
    pub book_title: String,

    #[serde(default)]
    pub message: Option<String>,

    pub rating: f64,

    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// A pre-booking request for a physical copy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreBooking {
    pub student_name: String,
    pub book_title: String,

    #[serde(default)]
    pub time: Option<DateTime<Utc>>,

    #[serde(default)]
    pub status: Option<String>,
}
