//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::codec::SerializedTicket;
use crate::domain::errors::TicketError;
use crate::domain::machine_key::MachineKey;
use crate::domain::ticket::Ticket;

/// Primary forms-authentication API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait FormsAuthApi: Send + Sync {
    // =========================================================================
    // Ticket Creation
    // =========================================================================

    /// Create a version-2 ticket issued now.
    ///
    /// Text fields are checked against the wire limit here, so an oversized
    /// field fails at creation rather than at serialization.
    fn create_ticket(
        &self,
        name: &str,
        expiration: i64,
        is_persistent: bool,
        user_data: &str,
        cookie_path: &str,
    ) -> Result<Ticket, TicketError>;

    /// Create a ticket using the configured lifetime, path, and persistence.
    fn issue_ticket(&self, name: &str, user_data: &str) -> Result<Ticket, TicketError>;

    /// True if the ticket is past its expiration at the service's clock.
    fn is_expired(&self, ticket: &Ticket) -> bool;

    // =========================================================================
    // Codec
    // =========================================================================

    /// Serialize to the fixed binary layout.
    fn serialize(&self, ticket: &Ticket) -> Result<SerializedTicket, TicketError>;

    /// Deserialize from the fixed binary layout.
    fn deserialize(&self, bytes: &[u8]) -> Result<Ticket, TicketError>;

    // =========================================================================
    // Protection
    // =========================================================================

    /// Encrypt and sign serialized ticket bytes.
    fn encrypt(&self, serialized: &SerializedTicket, key: &MachineKey)
        -> Result<Vec<u8>, TicketError>;

    /// Verify and decrypt, returning serialized ticket bytes.
    ///
    /// # Security
    /// - The tag is checked before any cipher operation
    fn decrypt(&self, buffer: &[u8], key: &MachineKey) -> Result<Vec<u8>, TicketError>;

    /// Serialize then encrypt.
    fn protect(&self, ticket: &Ticket, key: &MachineKey) -> Result<Vec<u8>, TicketError>;

    /// Decrypt then deserialize.
    fn unprotect(&self, buffer: &[u8], key: &MachineKey) -> Result<Ticket, TicketError>;

    /// Like `unprotect`, but also rejects expired tickets.
    fn unprotect_valid(&self, buffer: &[u8], key: &MachineKey) -> Result<Ticket, TicketError>;
}
