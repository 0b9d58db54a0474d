//! Student and teacher registration

use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::domain::error::{RegistrationError, DEFAULT_REGISTRATION_FAILURE_MESSAGE};
use crate::domain::models::config::ApiConfig;
use crate::domain::models::{
    RegisterRequest, RegistrationOutcome, RegistrationRole, ResponseEnvelope,
};
use crate::domain::ports::AuthTransport;

/// Registers student and teacher accounts
///
/// Requests are validated locally first; an invalid request is never sent.
/// Registration does not log the user in and never touches token storage.
pub struct RegistrationService {
    transport: Arc<dyn AuthTransport>,
    student_path: String,
    teacher_path: String,
}

impl RegistrationService {
    /// Create a service using the endpoint paths from `api`
    pub fn new(transport: Arc<dyn AuthTransport>, api: &ApiConfig) -> Self {
        Self {
            transport,
            student_path: api.register_student_path.clone(),
            teacher_path: api.register_teacher_path.clone(),
        }
    }

    /// Register a student account
    pub async fn register_student(
        &self,
        request: &RegisterRequest,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        self.register(RegistrationRole::Student, request).await
    }

    /// Register a teacher account
    pub async fn register_teacher(
        &self,
        request: &RegisterRequest,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        self.register(RegistrationRole::Teacher, request).await
    }

    /// Validate `request` for `role` and post it to that role's endpoint
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(
        &self,
        role: RegistrationRole,
        request: &RegisterRequest,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        if let Err(reason) = request.validate(role) {
            warn!(%role, %reason, "registration request failed validation");
            return Err(RegistrationError::Invalid(reason));
        }

        let path = match role {
            RegistrationRole::Student => &self.student_path,
            RegistrationRole::Teacher => &self.teacher_path,
        };

        let payload = serde_json::to_value(request)?;
        let body = self.transport.post_json(path, &payload).await.map_err(|e| {
            error!(%role, error = %e, "registration request failed");
            RegistrationError::Transport(e)
        })?;

        let envelope = ResponseEnvelope::from_body(body.as_ref());
        if !envelope.is_success() {
            let message = envelope.message_or(DEFAULT_REGISTRATION_FAILURE_MESSAGE);
            error!(%role, code = ?envelope.code, message = %message, "server rejected registration");
            return Err(RegistrationError::Rejected(message));
        }

        let message = envelope
            .data_text()
            .map(str::to_owned)
            .or_else(|| envelope.msg.clone())
            .unwrap_or_default();

        info!(%role, "registration succeeded");
        Ok(RegistrationOutcome { role, message })
    }
}
