//! Request payloads sent to the auth endpoints

use serde::{Deserialize, Serialize};
use std::fmt;

/// Username/password pair accepted by `POST /api/auth/login`
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginCredentials {
    /// Account username
    pub username: String,
    /// Account password
    pub password: String,
}

impl LoginCredentials {
    /// Build credentials from a username and password
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Which registration endpoint a request targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegistrationRole {
    /// Student account
    Student,
    /// Teacher account
    Teacher,
}

impl fmt::Display for RegistrationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "student"),
            Self::Teacher => write!(f, "teacher"),
        }
    }
}

/// Body for the student and teacher registration endpoints
///
/// Field names follow the backend's camelCase DTO. Role-specific numbers
/// are only serialized when set.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Requested username
    pub username: String,
    /// Account password
    pub password: String,
    /// Must equal `password`
    pub confirm_password: String,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    /// Required for students
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_no: Option<String>,
    /// Required for teachers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_no: Option<String>,
    /// Contact phone, teachers only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl RegisterRequest {
    /// Check the request against the rules the backend enforces
    ///
    /// Returns a human-readable reason for the first violation found.
    pub fn validate(&self, role: RegistrationRole) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("username is required".to_string());
        }
        if self.password.trim().is_empty() {
            return Err("password is required".to_string());
        }
        if self.password != self.confirm_password {
            return Err("passwords do not match".to_string());
        }

        let (number, label) = match role {
            RegistrationRole::Student => (&self.student_no, "student number"),
            RegistrationRole::Teacher => (&self.teacher_no, "teacher number"),
        };
        if number.as_deref().map(str::trim).unwrap_or_default().is_empty() {
            return Err(format!("{label} is required"));
        }

        Ok(())
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("real_name", &self.real_name)
            .field("student_no", &self.student_no)
            .field("teacher_no", &self.teacher_no)
            .field("phone", &self.phone)
            .finish_non_exhaustive()
    }
}
