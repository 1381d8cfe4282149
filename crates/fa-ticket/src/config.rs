//! Machine-key and ticket configuration.
//!
//! # Environment Variables
//!
//! - `FA_DECRYPTION`: Cipher algorithm (e.g. `AES`)
//! - `FA_DECRYPTION_KEY`: Hex cipher key
//! - `FA_VALIDATION`: Keyed-hash algorithm (e.g. `SHA256`)
//! - `FA_VALIDATION_KEY`: Hex keyed-hash key
//! - `FA_TICKET_TIMEOUT_MINUTES`: Ticket lifetime (default: 30)
//! - `FA_COOKIE_PATH`: Cookie path (default: `/`)
//! - `FA_PERSISTENT`: Persistent cookies (default: false)

use crate::adapters::web_config::{parse_machine_key, MACHINE_KEY_ATTRIBUTES};
use crate::domain::codec::MAX_FIELD_CHARS;
use crate::domain::errors::TicketError;
use crate::domain::machine_key::MachineKey;
use crate::domain::ticket::DEFAULT_VERSION;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// The four machine-key attributes as supplied by configuration.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineKeyConfig {
    /// Cipher algorithm name
    pub decryption: Option<String>,
    /// Hex cipher key
    pub decryption_key: Option<String>,
    /// Keyed-hash algorithm name
    pub validation: Option<String>,
    /// Hex keyed-hash key
    pub validation_key: Option<String>,
}

impl MachineKeyConfig {
    /// Read from `FA_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            decryption: lookup("FA_DECRYPTION"),
            decryption_key: lookup("FA_DECRYPTION_KEY"),
            validation: lookup("FA_VALIDATION"),
            validation_key: lookup("FA_VALIDATION_KEY"),
        }
    }

    /// Parse a JSON object with camelCase attribute names.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the JSON does not parse.
    pub fn from_json(json: &str) -> Result<Self, TicketError> {
        serde_json::from_str(json).map_err(|e| TicketError::InvalidConfig(e.to_string()))
    }

    /// Extract from a document containing a `machineKey` element.
    ///
    /// # Errors
    ///
    /// See [`parse_machine_key`].
    pub fn from_web_config(document: &str) -> Result<Self, TicketError> {
        let [decryption, decryption_key, validation, validation_key] =
            parse_machine_key(document)?;

        Ok(Self {
            decryption: Some(decryption),
            decryption_key: Some(decryption_key),
            validation: Some(validation),
            validation_key: Some(validation_key),
        })
    }

    /// Build the machine key.
    ///
    /// Absent attributes fail before any algorithm or key is inspected.
    ///
    /// # Errors
    ///
    /// - `MissingAttribute` naming the first absent attribute in
    ///   `decryption, decryptionKey, validation, validationKey` order
    /// - anything [`MachineKey::new`] returns
    pub fn into_machine_key(self) -> Result<MachineKey, TicketError> {
        let [d, dk, v, vk] = MACHINE_KEY_ATTRIBUTES;

        let decryption = self.decryption.ok_or(TicketError::MissingAttribute(d))?;
        let decryption_key = self.decryption_key.ok_or(TicketError::MissingAttribute(dk))?;
        let validation = self.validation.ok_or(TicketError::MissingAttribute(v))?;
        let validation_key = self.validation_key.ok_or(TicketError::MissingAttribute(vk))?;

        MachineKey::new(&decryption, &decryption_key, &validation, &validation_key)
    }
}

impl From<&MachineKey> for MachineKeyConfig {
    fn from(key: &MachineKey) -> Self {
        Self {
            decryption: Some(key.decryption().name().to_uppercase()),
            decryption_key: Some(hex::encode_upper(key.decryption_key().as_bytes())),
            validation: Some(key.validation().name().to_uppercase()),
            validation_key: Some(hex::encode_upper(key.validation_key().as_bytes())),
        }
    }
}

impl fmt::Debug for MachineKeyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("MachineKeyConfig")
            .field("decryption", &self.decryption)
            .field("decryption_key", &redact(&self.decryption_key))
            .field("validation", &self.validation)
            .field("validation_key", &redact(&self.validation_key))
            .finish()
    }
}

/// Defaults applied to issued tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketConfig {
    /// Format revision written into tickets
    pub version: u8,
    /// Lifetime of an issued ticket in minutes
    pub timeout_minutes: u64,
    /// Cookie path scope
    pub cookie_path: String,
    /// Whether issued tickets are persistent
    pub persistent: bool,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION,
            timeout_minutes: 30,
            cookie_path: "/".to_string(),
            persistent: false,
        }
    }
}

impl TicketConfig {
    /// Read overrides from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read overrides through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            version: defaults.version,
            timeout_minutes: lookup("FA_TICKET_TIMEOUT_MINUTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_minutes),
            cookie_path: lookup("FA_COOKIE_PATH").unwrap_or(defaults.cookie_path),
            persistent: lookup("FA_PERSISTENT")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.persistent),
        }
    }

    /// Parse a JSON object with camelCase field names.
    ///
    /// Absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the JSON does not parse or the result
    /// fails [`TicketConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, TicketError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| TicketError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Ticket lifetime in milliseconds.
    pub fn timeout_millis(&self) -> i64 {
        i64::try_from(self.timeout_minutes)
            .unwrap_or(i64::MAX)
            .saturating_mul(60_000)
    }

    /// Reject values that cannot produce a usable ticket.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for a zero timeout or an over-long cookie path.
    pub fn validate(&self) -> Result<(), TicketError> {
        if self.timeout_minutes == 0 {
            return Err(TicketError::InvalidConfig(
                "ticket timeout must be at least one minute".into(),
            ));
        }
        if self.cookie_path.encode_utf16().count() > MAX_FIELD_CHARS {
            return Err(TicketError::InvalidConfig(format!(
                "cookie path longer than {MAX_FIELD_CHARS} characters"
            )));
        }
        Ok(())
    }
}
