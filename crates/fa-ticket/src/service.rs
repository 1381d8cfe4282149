//! # Forms Authentication Service
//!
//! Application service layer that implements the `FormsAuthApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`FormsAuthApi`)
//! - Uses the outbound port (`TimeSource`) for issue dates and expiry
//! - Delegates encoding and protection to the domain layer

use crate::config::TicketConfig;
use crate::domain::codec::{self, SerializedTicket};
use crate::domain::errors::TicketError;
use crate::domain::machine_key::MachineKey;
use crate::domain::protection;
use crate::domain::ticket::Ticket;
use crate::ports::inbound::FormsAuthApi;
use crate::ports::outbound::{SystemTimeSource, TimeSource};
use tracing::{debug, warn};

/// Forms Authentication Service.
///
/// Stateless apart from its clock and ticket defaults; safe to share across
/// threads.
pub struct FormsAuthService<T: TimeSource> {
    time_source: T,
    config: TicketConfig,
}

impl<T: TimeSource> FormsAuthService<T> {
    /// Create a new service.
    ///
    /// # Arguments
    /// * `time_source` - Clock used for issue dates and expiry checks
    /// * `config` - Defaults for issued tickets
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `config` does not validate.
    pub fn new(time_source: T, config: TicketConfig) -> Result<Self, TicketError> {
        config.validate()?;
        Ok(Self {
            time_source,
            config,
        })
    }

    /// Ticket defaults in use.
    pub fn config(&self) -> &TicketConfig {
        &self.config
    }
}

impl FormsAuthService<SystemTimeSource> {
    /// Service on the system clock with default ticket settings.
    pub fn with_defaults() -> Self {
        Self {
            time_source: SystemTimeSource,
            config: TicketConfig::default(),
        }
    }
}

impl<T: TimeSource> FormsAuthApi for FormsAuthService<T> {
    fn create_ticket(
        &self,
        name: &str,
        expiration: i64,
        is_persistent: bool,
        user_data: &str,
        cookie_path: &str,
    ) -> Result<Ticket, TicketError> {
        let ticket = Ticket::builder(name, expiration)
            .version(self.config.version)
            .issue_date(self.time_source.now())
            .persistent(is_persistent)
            .user_data(user_data)
            .cookie_path(cookie_path)
            .build();

        codec::validate_fields(&ticket)?;
        Ok(ticket)
    }

    fn issue_ticket(&self, name: &str, user_data: &str) -> Result<Ticket, TicketError> {
        let now = self.time_source.now();
        let expiration = now.saturating_add(self.config.timeout_millis());

        self.create_ticket(
            name,
            expiration,
            self.config.persistent,
            user_data,
            &self.config.cookie_path,
        )
    }

    fn is_expired(&self, ticket: &Ticket) -> bool {
        ticket.expired_at(self.time_source.now())
    }

    fn serialize(&self, ticket: &Ticket) -> Result<SerializedTicket, TicketError> {
        codec::serialize(ticket)
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<Ticket, TicketError> {
        codec::deserialize(bytes).inspect_err(|e| {
            warn!(len = bytes.len(), error = %e, "Rejected malformed ticket");
        })
    }

    fn encrypt(
        &self,
        serialized: &SerializedTicket,
        key: &MachineKey,
    ) -> Result<Vec<u8>, TicketError> {
        let protected = protection::encrypt(serialized, key)?;
        debug!(
            decryption = %key.decryption(),
            validation = %key.validation(),
            plaintext_len = serialized.len(),
            protected_len = protected.len(),
            "Ticket protected"
        );
        Ok(protected)
    }

    fn decrypt(&self, buffer: &[u8], key: &MachineKey) -> Result<Vec<u8>, TicketError> {
        match protection::decrypt(buffer, key) {
            Ok(plaintext) => {
                debug!(
                    validation = %key.validation(),
                    protected_len = buffer.len(),
                    "Ticket verified"
                );
                Ok(plaintext)
            }
            Err(e) => {
                warn!(
                    validation = %key.validation(),
                    protected_len = buffer.len(),
                    error = %e,
                    "Rejected protected ticket"
                );
                Err(e)
            }
        }
    }

    fn protect(&self, ticket: &Ticket, key: &MachineKey) -> Result<Vec<u8>, TicketError> {
        let serialized = self.serialize(ticket)?;
        self.encrypt(&serialized, key)
    }

    fn unprotect(&self, buffer: &[u8], key: &MachineKey) -> Result<Ticket, TicketError> {
        let plaintext = self.decrypt(buffer, key)?;
        self.deserialize(&plaintext)
    }

    fn unprotect_valid(&self, buffer: &[u8], key: &MachineKey) -> Result<Ticket, TicketError> {
        let ticket = self.unprotect(buffer, key)?;
        if self.is_expired(&ticket) {
            debug!(expiration = ticket.expiration(), "Ticket expired");
            return Err(TicketError::TicketExpired {
                expiration: ticket.expiration(),
            });
        }
        Ok(ticket)
    }
}
