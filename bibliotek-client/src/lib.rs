//! Bibliotek Catalog Client
//!
//! Synchronous HTTP/JSON client for the catalog service. Implements the
//! core's [`CatalogService`] trait over `reqwest`'s blocking client with a
//! bounded per-request timeout; a timeout or connection failure surfaces as a
//! [`CatalogError`] and leaves caller state untouched. No retries are
//! performed automatically.

use bibliotek_core::catalog::CatalogService;
use bibliotek_core::error::{AuthError, CatalogError};
use bibliotek_core::types::{
    AdminCredentials, AdminStats, Book, BookSummary, Feedback, PreBooking, StudentCredentials,
    StudentProfile,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(6);

/// Default catalog address for local development
pub const DEFAULT_BACKEND: &str = "http://localhost:5000";

/// HTTP client for the catalog service
pub struct CatalogClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl CatalogClient {
    /// Create a client for the given base URL with the default timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self, CatalogError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Connect(e.to_string()))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { base_url, http })
    }

    /// The base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = self.url(path);
        tracing::debug!(%url, "catalog GET");

        let response = self.http.get(&url).send().map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "catalog GET failed");
            return Err(CatalogError::Status(status.as_u16()));
        }

        response.json().map_err(|e| CatalogError::Shape(e.to_string()))
    }

    fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, CatalogError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.post_raw(path, body)?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        response.json().map_err(|e| CatalogError::Shape(e.to_string()))
    }

    fn post_raw<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::blocking::Response, CatalogError> {
        let url = self.url(path);
        tracing::debug!(%url, "catalog POST");
        self.http.post(&url).json(body).send().map_err(transport_error)
    }

    // ── Supplemental catalog endpoints ───────────────────────────────────

    /// Admin dashboard aggregates
    pub fn admin_stats(&self) -> Result<AdminStats, CatalogError> {
        self.get_json("/api/admin/stats")
    }

    /// Pending pre-booking notifications
    pub fn notifications(&self) -> Result<Vec<PreBooking>, CatalogError> {
        self.get_json("/api/admin/notifications")
    }

    /// All submitted feedback entries
    pub fn feedbacks(&self) -> Result<Vec<Feedback>, CatalogError> {
        self.get_json("/api/admin/feedbacks")
    }

    /// Submit a rating-and-review for a book
    pub fn submit_feedback(&self, feedback: &Feedback) -> Result<(), CatalogError> {
        let _: Ack = self.post_json("/api/feedback", feedback)?;
        Ok(())
    }

    /// Pre-book a physical copy
    pub fn prebook(&self, student_name: &str, book_title: &str) -> Result<(), CatalogError> {
        let body = PrebookRequest {
            student_name,
            book_title,
        };
        let _: Ack = self.post_json("/api/prebook", &body)?;
        Ok(())
    }

    /// Record the end of a reading session
    pub fn logout(&self, name: &str, duration_minutes: f64) -> Result<(), CatalogError> {
        let body = LogoutRequest {
            name,
            duration: duration_minutes,
        };
        let _: Ack = self.post_json("/api/logout", &body)?;
        Ok(())
    }
}

impl CatalogService for CatalogClient {
    fn list_books(&self) -> Result<Vec<BookSummary>, CatalogError> {
        self.get_json("/api/books")
    }

    fn get_book(&self, id: &str) -> Result<Book, CatalogError> {
        let path = format!("/api/books/{}", urlencoding::encode(id));
        match self.get_json(&path) {
            Err(CatalogError::Status(404)) => Err(CatalogError::BookNotFound(id.to_string())),
            other => other,
        }
    }

    fn login_student(&self, creds: &StudentCredentials) -> Result<StudentProfile, AuthError> {
        let response: LoginResponse = self.post_json("/api/login/student", creds)?;
        match response {
            LoginResponse {
                success: true,
                user: Some(profile),
                ..
            } => Ok(profile),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    fn login_admin(&self, creds: &AdminCredentials) -> Result<(), AuthError> {
        let response = self.post_raw("/api/login/admin", creds)?;
        let status = response.status();

        if status.as_u16() == 401 {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()).into());
        }

        let ack: Ack = response
            .json()
            .map_err(|e| CatalogError::Shape(e.to_string()))?;
        if ack.success {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

fn transport_error(e: reqwest::Error) -> CatalogError {
    if e.is_timeout() {
        CatalogError::Timeout
    } else {
        CatalogError::Connect(e.to_string())
    }
}

/// Generic `{ success: ... }` acknowledgement body
#[derive(Debug, Deserialize)]
struct Ack {
    #[serde(default)]
    success: bool,

    #[allow(dead_code)]
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    success: bool,

    #[serde(default)]
    user: Option<StudentProfile>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebookRequest<'a> {
    student_name: &'a str,
    book_title: &'a str,
}

#[derive(Debug, Serialize)]
struct LogoutRequest<'a> {
    name: &'a str,
    duration: f64,
}
