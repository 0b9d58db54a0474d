//! Implementation of the `gradebook-auth token` command.

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::infrastructure::setup::AppServices;

/// Result of `token`
#[derive(Debug, Serialize)]
pub struct TokenOutput {
    /// Storage key the token was read from
    pub key: String,
    /// Token or full header value
    pub value: String,
}

impl CommandOutput for TokenOutput {
    // Bare value so the output can be captured by scripts
    fn to_human(&self) -> String {
        self.value.clone()
    }
}

/// Print the stored token or Authorization header
pub async fn execute(header: bool, config: &Config, json_mode: bool) -> Result<()> {
    let services = AppServices::build(config).await?;
    let value = if header {
        services.tokens.authorization_header().await
    } else {
        services.tokens.current_token().await
    };
    services.shutdown().await;

    let value = value?.ok_or_else(|| {
        anyhow!("No credential token stored. Run `gradebook-auth login` first.")
    })?;

    let output_data = TokenOutput {
        key: config.storage.token_key.clone(),
        value,
    };
    output(&output_data, json_mode);
    Ok(())
}
