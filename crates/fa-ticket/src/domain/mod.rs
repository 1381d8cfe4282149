//! # Domain Layer
//!
//! Ticket encoding and protection with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod codec;
pub mod errors;
pub mod machine_key;
pub mod protection;
pub mod tick;
pub mod ticket;
