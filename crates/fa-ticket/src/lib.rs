//! # Forms-Authentication Ticket Subsystem
//!
//! Issues, encodes, and protects legacy forms-authentication tickets.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Tick conversion, entities, codec, and the
//!   protection pipeline; no I/O
//! - **Ports Layer** (`ports/`): Inbound API trait, outbound clock trait
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//! - **Adapters** (`adapters/`): `machineKey` extraction from configuration
//!
//! ## Flow
//!
//! ```text
//! Ticket ──serialize──→ SerializedTicket ──encrypt──→ nonce||ciphertext||tag
//!                                                          │
//! Ticket ←─deserialize── serialized bytes ←─decrypt────────┘
//!                                         (tag verified first)
//! ```
//!
//! ## Security Notes
//!
//! - **Encrypt-then-MAC**: the tag covers the ciphertext and is checked in
//!   constant time before decryption
//! - **Field limit**: text fields hold at most 127 UTF-16 code units; longer
//!   values are rejected, never truncated

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(test)]
mod proptests;

// Re-export public API
pub use config::{MachineKeyConfig, TicketConfig};
pub use domain::codec::{deserialize, serialize, SerializedTicket, MAX_FIELD_CHARS};
pub use domain::errors::TicketError;
pub use domain::machine_key::MachineKey;
pub use domain::protection::{decrypt, encrypt};
pub use domain::tick::{from_ticks, to_ticks};
pub use domain::ticket::{Ticket, TicketBuilder};
pub use ports::inbound::FormsAuthApi;
pub use ports::outbound::{FixedTimeSource, SystemTimeSource, TimeSource};
pub use service::FormsAuthService;
