//! Implementation of the `gradebook-auth register` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::cli::progress::{create_spinner_with_message, ProgressBarExt};
use crate::cli::types::RegisterArgs;
use crate::domain::models::{Config, RegisterRequest, RegistrationRole};
use crate::infrastructure::setup::AppServices;

/// Result of `register`
#[derive(Debug, Serialize)]
pub struct RegisterOutput {
    /// Whether the backend accepted the registration
    pub success: bool,
    /// Account type registered
    pub role: RegistrationRole,
    /// Registered username
    pub username: String,
    /// Server message
    pub message: String,
}

impl CommandOutput for RegisterOutput {
    fn to_human(&self) -> String {
        if self.message.is_empty() {
            format!("Registered {} account '{}'.", self.role, self.username)
        } else {
            format!(
                "Registered {} account '{}': {}",
                self.role, self.username, self.message
            )
        }
    }
}

/// Map the command line onto a registration request for `role`
pub fn build_request(args: &RegisterArgs, role: RegistrationRole) -> RegisterRequest {
    let mut request = RegisterRequest {
        username: args.username.clone(),
        password: args.password.clone(),
        confirm_password: args.confirm_password.clone(),
        real_name: args.real_name.clone(),
        ..Default::default()
    };
    match role {
        RegistrationRole::Student => request.student_no = Some(args.number.clone()),
        RegistrationRole::Teacher => {
            request.teacher_no = Some(args.number.clone());
            request.phone = args.phone.clone();
        }
    }
    request
}

/// Validate and submit a registration
pub async fn execute(args: RegisterArgs, config: &Config, json_mode: bool) -> Result<()> {
    let role = RegistrationRole::from(args.role);
    let request = build_request(&args, role);

    let services = AppServices::build(config).await?;

    let spinner = create_spinner_with_message(format!("Registering {role} account"), json_mode);
    let result = services.registration.register(role, &request).await;
    services.shutdown().await;

    let outcome = match result {
        Ok(outcome) => {
            spinner.finish_success("Registration complete");
            outcome
        }
        Err(err) => {
            spinner.finish_error("Registration failed");
            return Err(err.into());
        }
    };

    let output_data = RegisterOutput {
        success: true,
        role: outcome.role,
        username: args.username,
        message: outcome.message,
    };
    output(&output_data, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::RoleArg;

    fn args(role: RoleArg) -> RegisterArgs {
        RegisterArgs {
            role,
            username: "carol".to_string(),
            password: "pw".to_string(),
            confirm_password: "pw".to_string(),
            number: "N-42".to_string(),
            real_name: None,
            phone: Some("555".to_string()),
        }
    }

    #[test]
    fn test_student_request_drops_phone() {
        let request = build_request(&args(RoleArg::Student), RegistrationRole::Student);
        assert_eq!(request.student_no.as_deref(), Some("N-42"));
        assert_eq!(request.teacher_no, None);
        assert_eq!(request.phone, None);
    }

    #[test]
    fn test_teacher_request_keeps_phone() {
        let request = build_request(&args(RoleArg::Teacher), RegistrationRole::Teacher);
        assert_eq!(request.teacher_no.as_deref(), Some("N-42"));
        assert_eq!(request.phone.as_deref(), Some("555"));
    }
}
