//! Implementation of the `gradebook-auth login` command.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::io::BufRead;

use crate::cli::output::{output, CommandOutput};
use crate::cli::progress::{create_spinner_with_message, ProgressBarExt};
use crate::cli::types::LoginArgs;
use crate::domain::models::{Config, LoginCredentials};
use crate::infrastructure::setup::AppServices;

/// Result of `login`
#[derive(Debug, Serialize)]
pub struct LoginOutput {
    /// Always true; failures are returned as errors
    pub success: bool,
    /// Username the backend reported, or the one supplied
    pub username: String,
    /// Normalised role, when the backend sent one
    pub role: Option<String>,
}

impl CommandOutput for LoginOutput {
    fn to_human(&self) -> String {
        match &self.role {
            Some(role) => format!("Logged in as {} ({role}). Token stored.", self.username),
            None => format!("Logged in as {}. Token stored.", self.username),
        }
    }
}

/// Log in and persist the returned token
pub async fn execute(args: LoginArgs, config: &Config, json_mode: bool) -> Result<()> {
    let password = resolve_password(&args)?;
    let credentials = LoginCredentials::new(args.username.clone(), password);

    let services = AppServices::build(config).await?;

    let spinner = create_spinner_with_message(
        format!("Logging in to {}", config.api.base_url),
        json_mode,
    );
    let result = services.login.login(&credentials).await;
    services.shutdown().await;

    let session = match result {
        Ok(session) => {
            spinner.finish_success("Login successful");
            session
        }
        Err(err) => {
            spinner.finish_error("Login failed");
            return Err(err.into());
        }
    };

    let output_data = LoginOutput {
        success: true,
        username: session.username.unwrap_or(args.username),
        role: session.role,
    };
    output(&output_data, json_mode);
    Ok(())
}

fn resolve_password(args: &LoginArgs) -> Result<String> {
    resolve_password_from(args, || {
        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read password from stdin")?;
        Ok(line)
    })
}

// An explicit --password-stdin wins over a password taken from GRADEBOOK_PASSWORD
fn resolve_password_from(
    args: &LoginArgs,
    read_stdin: impl FnOnce() -> Result<String>,
) -> Result<String> {
    if args.password_stdin {
        let line = read_stdin()?;
        return Ok(line.trim_end_matches(['\r', '\n']).to_string());
    }
    if let Some(password) = &args.password {
        return Ok(password.clone());
    }
    bail!("A password is required: pass --password, set GRADEBOOK_PASSWORD or use --password-stdin")
}
