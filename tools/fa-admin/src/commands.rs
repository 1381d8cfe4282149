//! Command implementations.
//!
//! Each command returns its output as a string so `main` only prints.

use anyhow::{Context, Result};
use fa_crypto::{DecryptionAlgorithm, ValidationAlgorithm};
use fa_ticket::{FormsAuthApi, MachineKey, MachineKeyConfig, TicketConfig, TimeSource};
use std::fs;
use std::path::Path;
use tracing::info;

/// Load the machine key from a configuration document or the environment.
pub fn load_machine_key(web_config: Option<&Path>) -> Result<MachineKey> {
    let config = match web_config {
        Some(path) => {
            let document = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            MachineKeyConfig::from_web_config(&document)
                .with_context(|| format!("extracting machineKey from {}", path.display()))?
        }
        None => MachineKeyConfig::from_env(),
    };

    let key = config.into_machine_key().context("building machine key")?;
    if let Err(e) = key.validate_for_production() {
        tracing::warn!(error = %e, "Machine key is not fit for production");
    }
    Ok(key)
}

/// Generate a machine key and render it as a `machineKey` element.
pub fn generate_key(validation: &str, decryption: &str) -> Result<String> {
    let validation: ValidationAlgorithm = validation.parse()?;
    let decryption: DecryptionAlgorithm = decryption.parse()?;

    let key = MachineKey::generate(decryption, validation)?;
    info!(%validation, %decryption, "Generated machine key");

    let config = MachineKeyConfig::from(&key);
    Ok(format!(
        r#"<machineKey validationKey="{}" decryptionKey="{}" validation="{}" decryption="{}" />"#,
        config.validation_key.unwrap_or_default(),
        config.decryption_key.unwrap_or_default(),
        config.validation.unwrap_or_default(),
        config.decryption.unwrap_or_default(),
    ))
}

/// Ticket fields supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct IssueRequest {
    /// User name
    pub name: String,
    /// Application payload
    pub user_data: String,
    /// Cookie path override
    pub cookie_path: Option<String>,
    /// Persistence flag
    pub persistent: bool,
    /// Lifetime override in minutes
    pub minutes: Option<u64>,
}

/// Issue a ticket and return it protected, as uppercase hex.
pub fn issue<T: TimeSource>(
    time_source: T,
    defaults: TicketConfig,
    request: &IssueRequest,
    key: &MachineKey,
) -> Result<String> {
    let config = TicketConfig {
        timeout_minutes: request.minutes.unwrap_or(defaults.timeout_minutes),
        cookie_path: request
            .cookie_path
            .clone()
            .unwrap_or(defaults.cookie_path),
        persistent: request.persistent || defaults.persistent,
        ..defaults
    };
    let service = fa_ticket::FormsAuthService::new(time_source, config)?;

    let ticket = service.issue_ticket(&request.name, &request.user_data)?;
    let protected = service.protect(&ticket, key)?;
    info!(
        name = ticket.name(),
        expiration = ticket.expiration(),
        bytes = protected.len(),
        "Issued ticket"
    );

    Ok(hex::encode_upper(protected))
}

/// Verify and decrypt a hex token, returning the ticket as pretty JSON.
pub fn open<T: TimeSource>(
    time_source: T,
    token: &str,
    key: &MachineKey,
    require_valid: bool,
) -> Result<String> {
    let buffer = hex::decode(token.trim()).context("token is not hex")?;
    let service = fa_ticket::FormsAuthService::new(time_source, TicketConfig::default())?;

    let ticket = if require_valid {
        service.unprotect_valid(&buffer, key)?
    } else {
        service.unprotect(&buffer, key)?
    };

    let json = serde_json::json!({
        "ticket": ticket,
        "expired": service.is_expired(&ticket),
    });
    Ok(serde_json::to_string_pretty(&json)?)
}
